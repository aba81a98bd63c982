use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pruefziffer::checksum;
use pruefziffer::{Iban, PostkontoNummer, SozialversicherungsNummer, ZpvNummer};

fn bench_postkonto_pruefziffer(c: &mut Criterion) {
    c.bench_function("postkonto_pruefziffer", |b| {
        b.iter(|| black_box(checksum::postkonto_pruefziffer(black_box(301045968))));
    });
}

fn bench_sozialversicherung_pruefziffer(c: &mut Criterion) {
    c.bench_function("sozialversicherung_pruefziffer", |b| {
        b.iter(|| {
            black_box(checksum::sozialversicherung_pruefziffer(black_box(
                7569217076985,
            )))
        });
    });
}

fn bench_zpv_pruefziffer(c: &mut Criterion) {
    c.bench_function("zpv_pruefziffer", |b| {
        b.iter(|| black_box(checksum::zpv_pruefziffer(black_box(17742883))));
    });
}

fn bench_iban_pruefsumme(c: &mut Criterion) {
    c.bench_function("iban_pruefsumme", |b| {
        b.iter(|| black_box(checksum::iban_pruefsumme(black_box("CH6309000000250097798"))));
    });
}

fn bench_parse_and_validate(c: &mut Criterion) {
    c.bench_function("postkonto_parse_formatted", |b| {
        b.iter(|| black_box("30-104596-8".parse::<PostkontoNummer>()));
    });

    c.bench_function("sozialversicherung_parse_formatted", |b| {
        b.iter(|| black_box("756.9217.0769.85".parse::<SozialversicherungsNummer>()));
    });

    c.bench_function("zpv_parse_formatted", |b| {
        b.iter(|| black_box("17'742'883".parse::<ZpvNummer>()));
    });

    c.bench_function("iban_construct_and_validate", |b| {
        b.iter(|| black_box(Iban::new(black_box("CH63 0900 0000 2500 9779 8")).is_valid()));
    });
}

criterion_group!(
    benches,
    bench_postkonto_pruefziffer,
    bench_sozialversicherung_pruefziffer,
    bench_zpv_pruefziffer,
    bench_iban_pruefsumme,
    bench_parse_and_validate,
);
criterion_main!(benches);
