use criterion::{Criterion, criterion_group, criterion_main};
use debug_sql_formatter::config::FormatConfig;
use debug_sql_formatter::format::reflow;
use debug_sql_formatter::process_debug_query;
use std::hint::black_box;

const DEBUG_LOG: &str = r#"[2024-01-01 10:00:00] LDB: select l.id, l.name, count(*) from layers l left join factions f on f.id = l.faction where l.map in (?, ?, ?, ?, ?, ?, ?) and (l.size = ? or l.size is null) group by l.id, l.name having count(*) > ? order by l.name limit ? offset ?
params: ["Narva", "Gorodok", "Yehorivka", "Mutaha", "Fallujah", "Kohat", "Logar", "Large", 1, 50, 100]"#;

fn bench_process_debug_query(c: &mut Criterion) {
    let config = FormatConfig::default();
    c.bench_function("process_debug_query", |b| {
        b.iter(|| black_box(process_debug_query(black_box(DEBUG_LOG), &config)))
    });
}

fn bench_reflow(c: &mut Criterion) {
    let config = FormatConfig::default();
    // 构造一条较长的单行 SQL
    let sql = (0..200)
        .map(|i| format!("SELECT c{i} FROM t{i} WHERE (a = {i} AND b = 'x{i}')"))
        .collect::<Vec<_>>()
        .join(" UNION ");
    c.bench_function("reflow_long_union", |b| {
        b.iter(|| black_box(reflow(black_box(&sql), &config)))
    });
}

criterion_group!(benches, bench_process_debug_query, bench_reflow);
criterion_main!(benches);
