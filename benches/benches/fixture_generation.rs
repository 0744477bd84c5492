use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use graphql_fixtures::{build_registry, emit, produce, Value};
use graphql_fixtures_config::FixturesConfig;
use graphql_fixtures_hir::parse_schema;
use graphql_fixtures_test_utils::{github_config, github_document, github_registry, schemas};
use std::hint::black_box;

fn bench_parse_schema(c: &mut Criterion) {
    c.bench_function("parse_schema", |b| {
        b.iter(|| parse_schema(black_box(schemas::GITHUB_SCHEMA), "schema.graphql"));
    });
}

fn bench_build_registry(c: &mut Criterion) {
    let document = github_document();
    let config = github_config();
    c.bench_function("build_registry", |b| {
        b.iter(|| build_registry(black_box(&document), &config));
    });
}

fn bench_generate_module(c: &mut Criterion) {
    let document = github_document();
    let config = github_config().with_immer(true);
    c.bench_function("generate_module", |b| {
        b.iter(|| emit::generate(black_box(&document), &config).to_string());
    });
}

fn bench_instantiate_untouched(c: &mut Criterion) {
    let registry = github_registry();
    c.bench_function("instantiate_untouched", |b| {
        b.iter(|| registry.instantiate(black_box("Repository")));
    });
}

fn bench_materialize_deep(c: &mut Criterion) {
    let registry = github_registry();
    c.bench_function("materialize_depth_3", |b| {
        b.iter_batched(
            || registry.instantiate("Repository").unwrap_or_default(),
            |fixture| fixture.materialize(3),
            BatchSize::SmallInput,
        );
    });
}

fn bench_recursive_walk(c: &mut Criterion) {
    let document = parse_schema(schemas::RECURSIVE_SCHEMA, "recursive.graphql")
        .unwrap_or_else(|err| panic!("{err}"));
    let registry = build_registry(&document, &FixturesConfig::default());
    c.bench_function("recursive_walk_100", |b| {
        b.iter_batched(
            || registry.instantiate("Category").unwrap_or_default(),
            |mut fixture| {
                for _ in 0..100 {
                    let Some(next) = fixture.get_path(&["parent"]).cloned() else {
                        break;
                    };
                    fixture = next;
                }
                fixture
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_produce_nested(c: &mut Criterion) {
    let registry = github_registry();
    let base = registry.instantiate("Repository").unwrap_or_default();
    c.bench_function("produce_nested_edit", |b| {
        b.iter(|| {
            produce(black_box(&base), |draft: &mut Value| {
                if let Some(login) = draft.get_path_mut(&["owner", "login"]) {
                    *login = Value::from("octocat");
                }
            })
        });
    });
}

criterion_group!(
    benches,
    bench_parse_schema,
    bench_build_registry,
    bench_generate_module,
    bench_instantiate_untouched,
    bench_materialize_deep,
    bench_recursive_walk,
    bench_produce_nested,
);
criterion_main!(benches);
