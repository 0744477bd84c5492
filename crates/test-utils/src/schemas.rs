//! Shared schema fixtures.
//!
//! Use these when a test needs a realistic schema but not a particular shape.
//! When the schema structure is the point of the test, prefer an inline
//! schema so the test documents itself.

/// A trimmed-down GitHub schema.
///
/// Covers every declaration kind: custom scalars (`URI`, `DateTime`,
/// `Base64String`), an interface, object types that reference each other in
/// cycles (`Repository` <-> `User`), a union, an enum whose first value is
/// `CLOSED`, input objects, a directive, and the `Query`/`Mutation` roots.
pub const GITHUB_SCHEMA: &str = r#"
directive @preview(toggledBy: String!) on SCALAR | OBJECT | FIELD_DEFINITION

"An RFC 3986, RFC 3987, and RFC 6570 (level 4) compliant URI string."
scalar URI

"An ISO-8601 encoded UTC date string."
scalar DateTime

"A (potentially binary) string encoded using base64."
scalar Base64String

interface Node {
  id: ID!
}

interface RepositoryOwner {
  id: ID!
  login: String!
  url: URI!
  avatarUrl(size: Int): URI!
}

type User implements Node & RepositoryOwner {
  id: ID!
  login: String!
  name: String
  url: URI!
  avatarUrl(size: Int): URI!
  createdAt: DateTime!
  isHireable: Boolean!
  followers: Int!
  repositories: [Repository!]!
  starredRepository: Repository
}

type Repository implements Node {
  id: ID!
  name: String!
  description: String
  url: URI!
  isPrivate: Boolean!
  stargazerCount: Int!
  owner: RepositoryOwner!
  createdAt: DateTime!
  pushedAt: DateTime
  issues: [Issue!]!
  primaryLanguage: Language
}

type Language implements Node {
  id: ID!
  name: String!
  color: String
}

enum IssueState {
  CLOSED
  OPEN
}

type Issue implements Node {
  id: ID!
  number: Int!
  title: String!
  state: IssueState!
  author: User!
  repository: Repository!
  labels: [String!]
}

type PullRequest implements Node {
  id: ID!
  number: Int!
  title: String!
  merged: Boolean!
  author: User!
  repository: Repository!
}

union IssueOrPullRequest = Issue | PullRequest

input FileAddition {
  path: String!
  contents: Base64String!
}

input CreateIssueInput {
  repositoryId: ID!
  title: String!
  body: String
  labelIds: [ID!]
}

type Query {
  viewer: User!
  repository(owner: String!, name: String!): Repository
}

type Mutation {
  createIssue(input: CreateIssueInput!): Issue
}
"#;

/// Self- and mutually-recursive types.
pub const RECURSIVE_SCHEMA: &str = r#"
type Category {
  name: String!
  parent: Category!
  children: [Category!]!
  featured: Product!
}

type Product {
  title: String!
  category: Category!
}
"#;
