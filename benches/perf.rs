use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use fide_monitor::history::{convert_history, parse_month_token};
use fide_monitor::profile::extract_history_rows;

const ABBREVS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

fn sample_history_html(months: usize) -> String {
    let mut html = String::from(
        "<html><body><table class=\"profile-table_chart-table\">\
         <tr><th>Period</th><th>Standard</th><th>Rapid</th><th>Blitz</th></tr>",
    );
    for i in 0..months {
        let year = 2025 - (i / 12) as i32;
        let abbrev = ABBREVS[11 - (i % 12)];
        html.push_str(&format!(
            "<tr><td>{abbrev}/{year}</td><td>{}</td><td>—</td><td>{}</td></tr>",
            1700 + (i % 100),
            1650 + (i % 100)
        ));
    }
    html.push_str("</table></body></html>");
    html
}

fn bench_month_token_parse(c: &mut Criterion) {
    c.bench_function("month_token_parse", |b| {
        b.iter(|| black_box(parse_month_token(black_box("Fev/2024"))))
    });
}

fn bench_history_pipeline(c: &mut Criterion) {
    // Twenty years of monthly rows, roughly a long-running player's table.
    let html = sample_history_html(240);
    c.bench_function("history_extract_convert", |b| {
        b.iter(|| {
            let rows = extract_history_rows(black_box(&html));
            black_box(convert_history(rows).len())
        })
    });
}

criterion_group!(benches, bench_month_token_parse, bench_history_pipeline);
criterion_main!(benches);
