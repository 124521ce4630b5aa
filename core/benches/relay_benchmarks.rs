use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use relay::{always_next, branch, compose, Pipeline, Step};

// --- Common Benchmark Response/Request ---
#[derive(Debug, Default)]
struct BenchResponse {
  counter: u64,
}

#[derive(Debug, Default)]
struct BenchRequest {
  flagged: bool,
}

// --- Helper: Trivial Counting Step ---
fn create_increment_step() -> Step<BenchResponse, BenchRequest> {
  always_next(|res: &mut BenchResponse, _req: &BenchRequest| {
    res.counter = res.counter.wrapping_add(1);
  })
}

// --- Benchmark Functions ---

fn bench_chain_run(c: &mut Criterion) {
  let mut group = c.benchmark_group("ChainRun");

  for num_steps in [1usize, 5, 10, 50].iter() {
    let steps: Vec<Step<BenchResponse, BenchRequest>> = (0..*num_steps).map(|_| create_increment_step()).collect();
    let pipeline = compose(steps);

    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), num_steps, |b, &n| {
      let req = BenchRequest::default();
      b.iter(|| {
        let mut res = BenchResponse::default();
        pipeline.run(&mut res, &req).unwrap();
        assert_eq!(res.counter, n as u64);
        res.counter
      });
    });
  }
  group.finish();
}

fn bench_branch_chain_run(c: &mut Criterion) {
  let mut group = c.benchmark_group("BranchChainRun");

  for num_steps in [1usize, 10].iter() {
    let steps: Vec<Step<BenchResponse, BenchRequest>> = (0..*num_steps)
      .map(|_| {
        branch(
          |_res: &BenchResponse, req: &BenchRequest| req.flagged,
          create_increment_step(),
          create_increment_step(),
        )
      })
      .collect();
    let pipeline: Pipeline<BenchResponse, BenchRequest> = steps.into_iter().collect();

    group.throughput(Throughput::Elements(*num_steps as u64));
    group.bench_with_input(BenchmarkId::from_parameter(num_steps), num_steps, |b, &n| {
      let req = BenchRequest { flagged: true };
      b.iter(|| {
        let mut res = BenchResponse::default();
        pipeline.run(&mut res, &req).unwrap();
        assert_eq!(res.counter, n as u64);
        res.counter
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_chain_run, bench_branch_chain_run);
criterion_main!(benches);
