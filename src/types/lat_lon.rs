/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are decimal degrees.
///
/// # Examples
///
/// ```
/// use gridwxcomp::LatLon;
///
/// let reno = LatLon(39.5296, -119.8138);
/// assert_eq!(reno.0, 39.5296); // Latitude
/// assert_eq!(reno.1, -119.8138); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}
