use criterion::{Criterion, black_box, criterion_group, criterion_main, Throughput};
use blake2x::{Blake2bParams, Blake2sParams, Blake2xbParams};
use blake2x::hash::{Blake2b, Blake2s};
use digest::Digest as _;

fn bench_blake2b(c: &mut Criterion) {
    let inp = [7u8; 16384];

    let mut g = c.benchmark_group("blake2b-16k");
    g.throughput(Throughput::Bytes(inp.len() as u64));

    g.bench_function("blake2x/params-hash", |b| {
        let params = Blake2bParams::new();
        b.iter(|| black_box(params.hash(black_box(&inp))))
    });

    g.bench_function("blake2x/typed", |b| {
        b.iter(|| {
            let mut hasher = Blake2b::<64>::new().unwrap();
            hasher.try_update(black_box(&inp)).unwrap();
            black_box(hasher.try_finalize().unwrap())
        })
    });

    g.bench_function("rust-crypto/blake2b512", |b| {
        b.iter(|| black_box(blake2::Blake2b512::digest(black_box(&inp))))
    });
}

fn bench_blake2s(c: &mut Criterion) {
    let inp = [7u8; 16384];

    let mut g = c.benchmark_group("blake2s-16k");
    g.throughput(Throughput::Bytes(inp.len() as u64));

    g.bench_function("blake2x/params-hash", |b| {
        let params = Blake2sParams::new();
        b.iter(|| black_box(params.hash(black_box(&inp))))
    });

    g.bench_function("blake2x/typed", |b| {
        b.iter(|| {
            let mut hasher = Blake2s::<32>::new().unwrap();
            hasher.try_update(black_box(&inp)).unwrap();
            black_box(hasher.try_finalize().unwrap())
        })
    });

    g.bench_function("rust-crypto/blake2s256", |b| {
        b.iter(|| black_box(blake2::Blake2s256::digest(black_box(&inp))))
    });
}

fn bench_xof(c: &mut Criterion) {
    let mut out = [0u8; 16384];

    let mut g = c.benchmark_group("blake2xb-squeeze-16k");
    g.throughput(Throughput::Bytes(out.len() as u64));

    let mut params = Blake2xbParams::new();
    params.output_len(out.len() as u32).unwrap();

    let mut xof = params.to_blake2x();
    xof.update(b"benchmark").unwrap();
    let reader = xof.finalize_xof().unwrap();

    g.bench_function("blake2x/sequential", |b| {
        b.iter(|| {
            let mut r = reader.clone();
            r.squeeze(black_box(&mut out)).unwrap();
        })
    });

    g.bench_function("blake2x/nodes", |b| {
        b.iter(|| {
            for (k, chunk) in out.chunks_mut(64).enumerate() {
                chunk.copy_from_slice(reader.node(k as u32).unwrap().as_bytes());
            }
            black_box(&out);
        })
    });
}

criterion_group!(benches, bench_blake2b, bench_blake2s, bench_xof);
criterion_main!(benches);
