use cayley_group::{verify, Group, GroupConfig, VerifyOptions};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const S3: &str = "<r,s|r^3=e,s^2=e,rrs=sr,srr=rs,srs=rr,rsr=s>";

fn table_bench(c: &mut Criterion) {
    let abelian = GroupConfig {
        abelian: true,
        ..GroupConfig::default()
    };

    c.bench_function("build_symmetric_group_s3", |b| {
        b.iter(|| black_box(Group::from_presentation(S3, GroupConfig::default()).unwrap()));
    });

    c.bench_function("build_abelian_z3_z4", |b| {
        b.iter(|| {
            black_box(Group::from_presentation("<a,b|a^3=e,b^4=e>", abelian.clone()).unwrap())
        });
    });

    let group = Group::from_presentation(S3, GroupConfig::default()).unwrap();
    c.bench_function("verify_s3_exhaustive", |b| {
        b.iter(|| black_box(verify(&group, &VerifyOptions::default()).unwrap()));
    });
}

criterion_group!(benches, table_bench);
criterion_main!(benches);
