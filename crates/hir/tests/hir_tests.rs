//! Integration tests for graphql-fixtures-hir.
//!
//! These tests verify lowering of SDL into ordered type definitions,
//! extension merging, and syntax error reporting.

use graphql_fixtures_hir::{parse_schema, SchemaError, TypeDefKind, TypeNode};

#[test]
fn test_definitions_keep_document_order() {
    let document = parse_schema(
        r"
scalar URI
type Repository { name: String! }
interface Node { id: ID! }
union SearchResult = Repository
enum IssueState { CLOSED OPEN }
input CreateIssueInput { title: String! }
directive @cached on FIELD_DEFINITION
",
        "schema.graphql",
    )
    .unwrap();

    let kinds: Vec<(&str, TypeDefKind)> = document
        .definitions()
        .iter()
        .map(|def| (def.name.as_ref(), def.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("URI", TypeDefKind::Scalar),
            ("Repository", TypeDefKind::Object),
            ("Node", TypeDefKind::Interface),
            ("SearchResult", TypeDefKind::Union),
            ("IssueState", TypeDefKind::Enum),
            ("CreateIssueInput", TypeDefKind::InputObject),
            ("cached", TypeDefKind::Directive),
        ]
    );
}

#[test]
fn test_fields_and_type_nodes() {
    let document = parse_schema(
        "type Repository { name: String! homepageUrl: URI topics: [String!]! }",
        "schema.graphql",
    )
    .unwrap();

    let repository = document.get("Repository").unwrap();
    assert_eq!(repository.fields.len(), 3);
    assert_eq!(
        repository.fields[0].ty,
        TypeNode::non_null(TypeNode::named("String"))
    );
    assert_eq!(repository.fields[1].ty, TypeNode::named("URI"));
    assert_eq!(repository.fields[2].ty.to_string(), "[String!]!");
}

#[test]
fn test_enum_values_and_union_members_in_source_order() {
    let document = parse_schema(
        r"
enum IssueState { CLOSED OPEN }
union IssueOrPullRequest = Issue | PullRequest
type Issue { id: ID! }
type PullRequest { id: ID! }
",
        "schema.graphql",
    )
    .unwrap();

    let state = document.get("IssueState").unwrap();
    let values: Vec<&str> = state.enum_values.iter().map(AsRef::as_ref).collect();
    assert_eq!(values, vec!["CLOSED", "OPEN"]);

    let union_def = document.get("IssueOrPullRequest").unwrap();
    let members: Vec<&str> = union_def.union_members.iter().map(AsRef::as_ref).collect();
    assert_eq!(members, vec!["Issue", "PullRequest"]);
}

#[test]
fn test_descriptions_are_kept() {
    let document = parse_schema(r#""An RFC 3986 URI" scalar URI"#, "schema.graphql").unwrap();
    assert_eq!(
        document.get("URI").unwrap().description.as_deref(),
        Some("An RFC 3986 URI")
    );
}

#[test]
fn test_extensions_merge_into_base_definition() {
    let document = parse_schema(
        r"
type User { id: ID! }
enum Role { ADMIN }
extend type User { name: String! }
extend enum Role { MEMBER }
union Actor = User
extend union Actor = Bot
type Bot { id: ID! }
",
        "schema.graphql",
    )
    .unwrap();

    assert_eq!(document.len(), 4);

    let user = document.get("User").unwrap();
    assert!(!user.is_extension);
    let fields: Vec<&str> = user.fields.iter().map(|f| f.name.as_ref()).collect();
    assert_eq!(fields, vec!["id", "name"]);

    let role = document.get("Role").unwrap();
    assert_eq!(role.enum_values.len(), 2);

    let actor = document.get("Actor").unwrap();
    assert_eq!(actor.union_members.len(), 2);
}

#[test]
fn test_extension_before_base_definition() {
    let document = parse_schema(
        r"
extend type User { name: String! }
type User { id: ID! }
",
        "schema.graphql",
    )
    .unwrap();

    assert_eq!(document.len(), 1);
    let fields: Vec<&str> = document
        .get("User")
        .unwrap()
        .fields
        .iter()
        .map(|f| f.name.as_ref())
        .collect();
    assert_eq!(fields, vec!["id", "name"]);
}

#[test]
fn test_extension_without_base_definition() {
    let document =
        parse_schema("extend type Query { version: String! }", "schema.graphql").unwrap();

    let query = document.get("Query").unwrap();
    assert!(query.is_extension);
    assert_eq!(query.fields.len(), 1);
}

#[test]
fn test_duplicate_definition_keeps_first() {
    let document = parse_schema(
        "type User { id: ID! } type User { name: String! }",
        "schema.graphql",
    )
    .unwrap();

    assert_eq!(document.len(), 1);
    assert_eq!(&*document.get("User").unwrap().fields[0].name, "id");
}

#[test]
fn test_directive_and_type_with_same_name() {
    let document = parse_schema("directive @key on OBJECT scalar key", "schema.graphql").unwrap();

    assert_eq!(document.len(), 2);
    assert_eq!(document.get("key").unwrap().kind, TypeDefKind::Scalar);
}

#[test]
fn test_executable_definitions_are_ignored() {
    let document = parse_schema(
        "type Query { viewer: String } query Viewer { viewer } schema { query: Query }",
        "schema.graphql",
    )
    .unwrap();

    assert_eq!(document.len(), 1);
}

#[test]
fn test_syntax_error_is_fatal() {
    let err = parse_schema("type Repository { name: }", "broken.graphql").unwrap_err();
    let SchemaError::Syntax { path, errors } = &err;
    assert_eq!(path, "broken.graphql");
    assert!(!errors.is_empty());
    assert!(err.to_string().starts_with("Failed to parse schema broken.graphql"));
}
