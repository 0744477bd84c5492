//! Integration tests for fixture registries.
//!
//! These tests build registries from SDL and check the defaults each
//! declaration kind produces, lazy field resolution and recipes.

use graphql_fixtures::{FactoryBody, RecipeAccessor, Value};
use graphql_fixtures_config::{FixturesConfig, ScalarShape};
use graphql_fixtures_test_utils::schemas::RECURSIVE_SCHEMA;
use graphql_fixtures_test_utils::{github_registry, test_registry};

fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    value.get_path(path).and_then(Value::as_str)
}

#[test]
fn test_unaliased_scalar_defaults_to_empty_object() {
    let registry = github_registry();
    let value = registry.instantiate("Base64String").unwrap();
    assert!(value.as_object().is_some_and(graphql_fixtures::Object::is_empty));
}

#[test]
fn test_configured_scalar_default() {
    let registry = github_registry();
    assert_eq!(
        registry.instantiate("URI").unwrap().as_str(),
        Some("https://example.com")
    );

    let repository = registry.instantiate("Repository").unwrap();
    assert_eq!(str_at(&repository, &["url"]), Some("https://example.com"));
}

#[test]
fn test_scalar_alias_shapes() {
    let config = FixturesConfig::default()
        .with_scalar_alias("DateTime", ScalarShape::String)
        .with_scalar_alias("BigInt", ScalarShape::Number);
    let registry = test_registry("scalar DateTime scalar BigInt scalar JSON", &config);

    assert_eq!(registry.instantiate("DateTime").unwrap().as_str(), Some(""));
    assert_eq!(registry.instantiate("BigInt").unwrap().as_int(), Some(0));
    assert!(registry.instantiate("JSON").unwrap().as_object().is_some());
}

#[test]
fn test_raw_scalar_default_is_kept_verbatim() {
    let config = FixturesConfig::default().with_scalar_default("Date", "new Date(0)");
    let registry = test_registry("scalar Date type Event { at: Date! }", &config);

    assert_eq!(registry.instantiate("Date").unwrap().as_raw(), Some("new Date(0)"));
    let event = registry.instantiate("Event").unwrap();
    assert_eq!(
        event.get_path(&["at"]).and_then(Value::as_raw),
        Some("new Date(0)")
    );
}

#[test]
fn test_enum_defaults_to_first_declared_value() {
    let registry = github_registry();
    assert_eq!(registry.instantiate("IssueState").unwrap().as_enum(), Some("CLOSED"));

    let reordered = test_registry("enum IssueState { OPEN CLOSED }", &FixturesConfig::default());
    assert_eq!(reordered.instantiate("IssueState").unwrap().as_enum(), Some("OPEN"));
}

#[test]
fn test_union_uses_first_member() {
    let registry = github_registry();
    let value = registry.instantiate("IssueOrPullRequest").unwrap();
    assert_eq!(value.as_object().and_then(|o| o.typename()), Some("Issue"));
}

#[test]
fn test_empty_enum_and_root_types_have_no_factory() {
    let registry = test_registry(
        r"
type Query { version: String! }
type Mutation { bump: Int }
type Subscription { tick: Int! }
enum Nothing
directive @internal on FIELD_DEFINITION
scalar String
",
        &FixturesConfig::default(),
    );

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["Subscription"]);
}

#[test]
fn test_objects_carry_their_typename() {
    let registry = github_registry();
    for factory in registry.factories() {
        if let FactoryBody::Record {
            typename: Some(typename),
            ..
        } = &factory.body
        {
            assert_eq!(typename, &factory.name);
            let value = registry.instantiate(&factory.name).unwrap();
            assert_eq!(
                value.as_object().and_then(|o| o.typename()),
                Some(&*factory.name)
            );
        }
    }
}

#[test]
fn test_interfaces_and_inputs_have_no_typename() {
    let registry = github_registry();
    for name in ["RepositoryOwner", "Node", "CreateIssueInput", "FileAddition"] {
        let value = registry.instantiate(name).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("__typename"), "{name}");
    }

    let input = registry.instantiate("FileAddition").unwrap();
    assert_eq!(str_at(&input, &["path"]), Some(""));
    assert!(input
        .get_path(&["contents"])
        .and_then(Value::as_object)
        .is_some());
}

#[test]
fn test_repository_field_defaults() {
    let registry = github_registry();
    let repository = registry.instantiate("Repository").unwrap();

    assert_eq!(str_at(&repository, &["name"]), Some(""));
    assert_eq!(
        repository.get_path(&["stargazerCount"]).and_then(Value::as_int),
        Some(0)
    );
    assert_eq!(
        repository.get_path(&["isPrivate"]).and_then(Value::as_bool),
        Some(false)
    );
    assert!(repository.get_path(&["description"]).unwrap().is_absent());
    assert!(repository.get_path(&["primaryLanguage"]).unwrap().is_absent());
    assert_eq!(
        repository
            .get_path(&["issues"])
            .and_then(Value::as_list)
            .map(<[Value]>::len),
        Some(0)
    );
    assert_eq!(str_at(&repository, &["createdAt"]), Some(""));
}

#[test]
fn test_interface_field_resolves_through_interface_factory() {
    let registry = github_registry();
    let repository = registry.instantiate("Repository").unwrap();

    let owner = repository.get_path(&["owner"]).and_then(Value::as_object).unwrap();
    assert_eq!(owner.typename(), None);
    assert_eq!(owner.get("login").and_then(Value::as_str), Some(""));
}

#[test]
fn test_fields_are_resolved_lazily() {
    let registry = github_registry();
    let value = registry.instantiate("Issue").unwrap();
    let issue = value.as_object().unwrap();

    assert!(!issue.is_resolved("author"));
    assert!(!issue.is_resolved("repository"));

    let _ = issue.get("author");
    assert!(issue.is_resolved("author"));
    assert!(!issue.is_resolved("repository"));
}

#[test]
fn test_repeated_reads_return_the_same_value() {
    let registry = github_registry();
    let value = registry.instantiate("Issue").unwrap();
    let issue = value.as_object().unwrap();

    let first = issue.get("author").unwrap();
    let second = issue.get("author").unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(first
        .as_object()
        .zip(second.as_object())
        .is_some_and(|(a, b)| a.ptr_eq(b)));
}

#[test]
fn test_separate_instances_do_not_share_fields() {
    let registry = github_registry();
    let a = registry.instantiate("Issue").unwrap();
    let b = registry.instantiate("Issue").unwrap();

    let author_a = a.get_path(&["author"]).and_then(Value::as_object).unwrap();
    let author_b = b.get_path(&["author"]).and_then(Value::as_object).unwrap();
    assert!(!author_a.ptr_eq(author_b));
}

#[test]
fn test_recursive_types_can_be_walked() {
    let registry = test_registry(RECURSIVE_SCHEMA, &FixturesConfig::default());
    let mut value = registry.instantiate("Category").unwrap();

    for _ in 0..50 {
        assert_eq!(str_at(&value, &["name"]), Some(""));
        value = value.get_path(&["parent"]).unwrap().clone();
    }

    let title = registry
        .instantiate("Product")
        .unwrap()
        .get_path(&["category", "featured", "category", "featured", "title"])
        .and_then(Value::as_str)
        .map(String::from);
    assert_eq!(title.as_deref(), Some(""));
}

#[test]
fn test_numeric_builtins_keep_their_kind() {
    let registry = test_registry(
        "type Money { amount: Float! count: Int! }",
        &FixturesConfig::default(),
    );

    let money = registry.instantiate("Money").unwrap();
    assert_eq!(money.get_path(&["amount"]).and_then(Value::as_float), Some(0.0));
    assert_eq!(money.get_path(&["count"]).and_then(Value::as_int), Some(0));
    assert_eq!(money.get_path(&["count"]).and_then(Value::as_float), None);
}

#[test]
fn test_reference_to_type_without_factory_is_absent() {
    let registry = test_registry(
        r"
type Query { version: String! }
union Empty
type Holder { query: Query! empty: Empty! }
",
        &FixturesConfig::default(),
    );

    assert!(!registry.contains("Query"));
    assert!(!registry.contains("Empty"));

    let holder = registry.instantiate("Holder").unwrap();
    assert!(holder.get_path(&["query"]).unwrap().is_absent());
    assert!(holder.get_path(&["empty"]).unwrap().is_absent());
}

#[test]
fn test_recipe_does_not_alter_other_fixtures() {
    let accessor = RecipeAccessor::new(github_registry());

    let plain = accessor.fixture("Repository").unwrap();
    let renamed = accessor
        .fixture_with("Repository", |draft| {
            if let Some(repo) = draft.as_object_mut() {
                repo.set("name", "x");
            }
        })
        .unwrap();

    assert_eq!(str_at(&renamed, &["name"]), Some("x"));
    assert_eq!(str_at(&plain, &["name"]), Some(""));
    assert_eq!(str_at(&accessor.fixture("Repository").unwrap(), &["name"]), Some(""));
}

#[test]
fn test_recipe_on_nested_field_copies_the_path() {
    let accessor = RecipeAccessor::new(github_registry());
    let base = accessor.fixture("Issue").unwrap();
    let author_before = base.get_path(&["author"]).and_then(Value::as_object).cloned().unwrap();

    let next = graphql_fixtures::produce(&base, |draft| {
        if let Some(login) = draft.get_path_mut(&["author", "login"]) {
            *login = Value::from("octocat");
        }
    });

    assert_eq!(str_at(&next, &["author", "login"]), Some("octocat"));
    assert_eq!(str_at(&base, &["author", "login"]), Some(""));
    let author_after = base.get_path(&["author"]).and_then(Value::as_object).unwrap();
    assert!(author_before.ptr_eq(author_after));

    // untouched branches stay shared
    let repo_base = base.get_path(&["repository"]).and_then(Value::as_object).unwrap();
    let repo_next = next.get_path(&["repository"]).and_then(Value::as_object).unwrap();
    assert!(repo_base.ptr_eq(repo_next));
}

#[test]
fn test_fixtures_can_be_shared_across_threads() {
    let registry = github_registry();
    let value = registry.instantiate("Repository").unwrap();

    let names: Vec<Option<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| str_at(&value, &["owner", "login"]).map(String::from)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(names.iter().all(|name| name.as_deref() == Some("")));
}
