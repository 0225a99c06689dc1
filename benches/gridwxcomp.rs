use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridwxcomp::{GridCell, GridCellLocator, GridSpec, Station};

fn gridmet_block(rows: usize, cols: usize) -> Vec<GridCell> {
    let spec = GridSpec::GRIDMET;
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .enumerate()
        .map(|(id, (row, col))| GridCell {
            gridmet_id: id as i64,
            latitude: spec.origin_lat + row as f64 * spec.cell_size,
            longitude: spec.origin_lon + col as f64 * spec.cell_size,
            elevation_m: None,
        })
        .collect()
}

fn stations(n: usize) -> Vec<Station> {
    (0..n)
        .map(|i| Station {
            fid: i.to_string(),
            latitude: 30.0 + (i % 97) as f64 * 0.137,
            longitude: -120.0 + (i % 89) as f64 * 0.291,
            elevation_m: None,
            file_path: String::new(),
        })
        .collect()
}

fn bench_matching(c: &mut Criterion) {
    let cells = gridmet_block(300, 600);
    let stations = stations(1_000);

    c.bench_function("build_locator", |b| {
        b.iter(|| GridCellLocator::new(black_box(cells.clone()), GridSpec::GRIDMET))
    });

    let locator = GridCellLocator::new(cells.clone(), GridSpec::GRIDMET);
    c.bench_function("match_stations", |b| {
        b.iter(|| locator.match_stations(black_box(&stations)))
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
