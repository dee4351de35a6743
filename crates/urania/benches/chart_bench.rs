use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::ephemeris::{AngleReading, BodyReading, GeoLocation};
use urania::western::interpret;
use urania::{
    BirthMoment, BodyId, ChartAssembler, ChartResponse, ChartSettings, EphemerisError,
    EphemerisProvider, HouseSystem, NodeSource, TimeResolver,
};

/// Spreads the bodies around the zodiac so every stage does real work.
struct SpreadEphemeris;

impl EphemerisProvider for SpreadEphemeris {
    fn body_position(
        &self,
        _jd_ut: f64,
        body: BodyId,
        _nodes: NodeSource,
    ) -> Result<BodyReading, EphemerisError> {
        let i = body as usize as f64;
        Ok(BodyReading::measured(body, i * 27.3, 1.0 - i * 0.2))
    }

    fn angles(
        &self,
        _jd_ut: f64,
        _location: &GeoLocation,
        _house_system: HouseSystem,
    ) -> Result<AngleReading, EphemerisError> {
        Ok(AngleReading {
            ascendant: 45.5,
            midheaven: 310.25,
        })
    }
}

fn birth() -> BirthMoment {
    let date = NaiveDate::from_ymd_opt(1974, 11, 22).unwrap();
    BirthMoment::new(date, 19, 10, -34.9285, 138.6007, Some("Adelaide, SA, Australia")).unwrap()
}

fn bench_interpret(c: &mut Criterion) {
    c.bench_function("interpret_longitude", |b| {
        b.iter(|| interpret(black_box(239.665_698)))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = TimeResolver::new();
    let moment = birth();
    c.bench_function("resolve_birth_moment", |b| {
        b.iter(|| resolver.resolve(black_box(&moment)))
    });
}

fn bench_assemble(c: &mut Criterion) {
    let assembler = ChartAssembler::new(SpreadEphemeris, ChartSettings::default());
    let moment = birth();
    c.bench_function("assemble_chart", |b| {
        b.iter(|| assembler.assemble(black_box(&moment)))
    });

    let chart = assembler.assemble(&moment).unwrap();
    c.bench_function("chart_response_json", |b| {
        b.iter(|| ChartResponse::from(black_box(&chart)).to_json())
    });
}

criterion_group!(benches, bench_interpret, bench_resolve, bench_assemble);
criterion_main!(benches);
