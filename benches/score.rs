// benches/score.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use mesa_scrape::extract;
use mesa_scrape::scope::ScopeData;
use mesa_scrape::score::score_votes;

// A realistic mesa payload: full ancestor chain, baseline parties plus a
// local list, round-number aggregates.
const PAYLOAD: &str = r#"{
    "fathers": [
        {"level": 1, "name": "x", "codigo": "x"},
        {"level": 2, "name": "Buenos Aires", "codigo": "02"},
        {"level": 4, "name": "La Plata", "codigo": "02001"},
        {"level": 5, "name": "La Plata", "codigo": "020011"},
        {"level": 6, "name": "Circuito 4", "codigo": "0200114"},
        {"level": 7, "name": "Escuela N 12", "codigo": "02001141"}
    ],
    "partidos": [
        {"code": "134", "name": "UNION POR LA PATRIA", "votos": 131},
        {"code": "135", "name": "LA LIBERTAD AVANZA", "votos": 102},
        {"code": "132", "name": "JUNTOS POR EL CAMBIO", "votos": 84},
        {"code": "133", "name": "HACEMOS POR NUESTRO PAIS", "votos": 21},
        {"code": "136", "name": "FRENTE DE IZQUIERDA Y DE TRABAJADORES - UNIDAD", "votos": 9},
        {"code": "901", "name": "LISTA VECINAL", "votos": 3}
    ],
    "nulos": 6, "abstencion": 44, "afirmativos": 350,
    "blancos": 8, "impugnados": 1, "totalVotos": 365, "census": 400
}"#;

fn bench_score(c: &mut Criterion) {
    let data: ScopeData = serde_json::from_str(PAYLOAD).unwrap();
    let votes = extract::votes_of(&data);

    c.bench_function("score_votes", |b| {
        b.iter(|| score_votes(black_box(&votes)).unwrap())
    });
}

fn bench_decode_and_extract(c: &mut Criterion) {
    c.bench_function("decode_and_extract", |b| {
        b.iter(|| {
            let data: ScopeData = serde_json::from_str(black_box(PAYLOAD)).unwrap();
            let loc = extract::location_of(&data);
            let votes = extract::votes_of(&data);
            black_box((loc, votes))
        })
    });
}

criterion_group!(benches, bench_score, bench_decode_and_extract);
criterion_main!(benches);
