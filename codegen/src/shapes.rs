//! Shape resolution and type mapping from Smithy shapes to Rust types.
//!
//! Starting from [`TARGET_OPERATIONS`], this module walks the transitive
//! closure of referenced shapes and sorts them into enums, shared structs,
//! per-operation request structs and per-operation result structs.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};

use crate::model::{AggregateShape, MemberShape, Shape, SmithyModel};

const S3_NAMESPACE: &str = "com.amazonaws.s3#";

const UNIT_SHAPE: &str = "smithy.api#Unit";

/// Maximum recursion depth when resolving shape references.
const MAX_RESOLVE_DEPTH: usize = 15;

/// Operations to generate, in `S3Operation` declaration order.
pub const TARGET_OPERATIONS: &[&str] = &[
    "CreateBucket",
    "DeleteBucket",
    "HeadBucket",
    "ListBuckets",
    "GetBucketLocation",
    "GetBucketVersioning",
    "PutBucketVersioning",
    "GetBucketEncryption",
    "PutBucketEncryption",
    "DeleteBucketEncryption",
    "GetBucketCors",
    "PutBucketCors",
    "DeleteBucketCors",
    "GetBucketLifecycleConfiguration",
    "PutBucketLifecycleConfiguration",
    "DeleteBucketLifecycle",
    "GetBucketPolicy",
    "PutBucketPolicy",
    "DeleteBucketPolicy",
    "GetBucketTagging",
    "PutBucketTagging",
    "DeleteBucketTagging",
    "GetBucketNotificationConfiguration",
    "PutBucketNotificationConfiguration",
    "GetBucketLogging",
    "PutBucketLogging",
    "GetPublicAccessBlock",
    "PutPublicAccessBlock",
    "DeletePublicAccessBlock",
    "GetBucketOwnershipControls",
    "PutBucketOwnershipControls",
    "DeleteBucketOwnershipControls",
    "GetObjectLockConfiguration",
    "PutObjectLockConfiguration",
    "GetBucketAccelerateConfiguration",
    "PutBucketAccelerateConfiguration",
    "GetBucketRequestPayment",
    "PutBucketRequestPayment",
    "GetBucketWebsite",
    "PutBucketWebsite",
    "DeleteBucketWebsite",
    "GetBucketAcl",
    "PutBucketAcl",
    "GetBucketPolicyStatus",
    "PutObject",
    "GetObject",
    "HeadObject",
    "DeleteObject",
    "DeleteObjects",
    "CopyObject",
    "GetObjectTagging",
    "PutObjectTagging",
    "DeleteObjectTagging",
    "GetObjectAcl",
    "PutObjectAcl",
    "GetObjectRetention",
    "PutObjectRetention",
    "GetObjectLegalHold",
    "PutObjectLegalHold",
    "GetObjectAttributes",
    "CreateMultipartUpload",
    "UploadPart",
    "UploadPartCopy",
    "CompleteMultipartUpload",
    "AbortMultipartUpload",
    "ListParts",
    "ListMultipartUploads",
    "ListObjects",
    "ListObjectsV2",
    "ListObjectVersions",
    "GetBucketReplication",
    "PutBucketReplication",
    "DeleteBucketReplication",
    "GetBucketInventoryConfiguration",
    "PutBucketInventoryConfiguration",
    "DeleteBucketInventoryConfiguration",
    "ListBucketInventoryConfigurations",
    "GetBucketAnalyticsConfiguration",
    "PutBucketAnalyticsConfiguration",
    "DeleteBucketAnalyticsConfiguration",
    "ListBucketAnalyticsConfigurations",
    "GetBucketMetricsConfiguration",
    "PutBucketMetricsConfiguration",
    "DeleteBucketMetricsConfiguration",
    "ListBucketMetricsConfigurations",
    "GetBucketIntelligentTieringConfiguration",
    "PutBucketIntelligentTieringConfiguration",
    "DeleteBucketIntelligentTieringConfiguration",
    "ListBucketIntelligentTieringConfigurations",
    "RestoreObject",
    "GetObjectTorrent",
];

/// Shared shapes whose Smithy name would collide with a generated
/// `Result` struct or with `std` names.
const SHAPE_RENAMES: &[(&str, &str)] = &[
    ("CopyObjectResult", "CopyObjectResultDetails"),
    ("CopyPartResult", "CopyPartResultDetails"),
    ("Error", "DeleteError"),
];

/// Generated module a request or result struct lands in.
fn category_of(op: &str) -> &'static str {
    const BUCKET: &[&str] = &[
        "CreateBucket",
        "DeleteBucket",
        "HeadBucket",
        "ListBuckets",
        "GetBucketLocation",
    ];
    const OBJECT: &[&str] = &[
        "PutObject",
        "GetObject",
        "HeadObject",
        "DeleteObject",
        "DeleteObjects",
        "CopyObject",
        "RestoreObject",
        "GetObjectTorrent",
    ];
    const MULTIPART: &[&str] = &[
        "CreateMultipartUpload",
        "UploadPart",
        "UploadPartCopy",
        "CompleteMultipartUpload",
        "AbortMultipartUpload",
        "ListParts",
        "ListMultipartUploads",
    ];
    const LIST: &[&str] = &["ListObjects", "ListObjectsV2", "ListObjectVersions"];
    const ANALYTICS_FAMILIES: &[&str] = &[
        "AnalyticsConfiguration",
        "IntelligentTieringConfiguration",
        "InventoryConfiguration",
        "MetricsConfiguration",
    ];

    if BUCKET.contains(&op) {
        "bucket"
    } else if OBJECT.contains(&op) {
        "object"
    } else if MULTIPART.contains(&op) {
        "multipart"
    } else if LIST.contains(&op) {
        "list"
    } else if ANALYTICS_FAMILIES
        .iter()
        .any(|family| op.ends_with(family) || op.ends_with(&format!("{family}s")))
    {
        "analytics"
    } else {
        "config"
    }
}

#[derive(Debug)]
pub struct OperationInfo {
    pub name: String,
    /// Result struct name, `None` for a `Unit` output.
    pub result: Option<String>,
}

/// A struct member ready for emission.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Rust field name (snake_case, raw identifier for keywords).
    pub rust_name: String,
    /// Rust type expression, e.g. `Option<String>` or `Vec<Tag>`.
    pub rust_type: String,
    pub required: bool,
    /// Rendered as redacted by `Debug`.
    pub sensitive: bool,
    pub http_binding: Option<HttpBinding>,
}

/// HTTP binding of a request or result member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBinding {
    Label,
    Query(String),
    Header(String),
    Payload,
    PrefixHeaders(String),
}

#[derive(Debug, Clone)]
pub struct EnumVariantInfo {
    pub rust_name: String,
    /// Wire value from `@enumValue`.
    pub string_value: String,
}

/// A request or result struct bound to one operation.
#[derive(Debug)]
pub struct OperationStruct {
    pub operation: String,
    pub category: &'static str,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug)]
pub struct ResolvedModel {
    pub operations: Vec<OperationInfo>,
    pub enums: BTreeMap<String, Vec<EnumVariantInfo>>,
    pub shared_structs: BTreeMap<String, Vec<FieldInfo>>,
    pub requests: BTreeMap<String, OperationStruct>,
    pub results: BTreeMap<String, OperationStruct>,
}

impl ResolvedModel {
    /// Whether a type name is a generated enum or shared struct.
    pub fn is_model_type(&self, name: &str) -> bool {
        self.enums.contains_key(name) || self.shared_structs.contains_key(name)
    }
}

/// Rust name for a shared shape.
pub fn rust_shape_name(short: &str) -> String {
    SHAPE_RENAMES
        .iter()
        .find(|(from, _)| *from == short)
        .map_or_else(|| short.to_owned(), |(_, to)| (*to).to_owned())
}

/// Resolve a Smithy shape target to a Rust type string.
fn resolve_rust_type(model: &SmithyModel, target: &str, enums: &BTreeSet<String>) -> String {
    if let Some(builtin) = resolve_builtin_type(target) {
        return builtin.to_owned();
    }
    let Some(shape) = model.shapes.get(target) else {
        return "String".to_owned();
    };
    let short = SmithyModel::short_name(target);

    match shape {
        Shape::String(s) if s.traits.contains_key("smithy.api#streaming") => {
            "bytes::Bytes".to_owned()
        }
        Shape::String(_) => "String".to_owned(),
        Shape::Boolean(_) => "bool".to_owned(),
        Shape::Integer(_) => "i32".to_owned(),
        Shape::Long(_) => "i64".to_owned(),
        Shape::Timestamp(_) => "chrono::DateTime<chrono::Utc>".to_owned(),
        Shape::Blob(b) if b.traits.contains_key("smithy.api#streaming") => {
            "StreamingBlob".to_owned()
        }
        Shape::Blob(_) => "bytes::Bytes".to_owned(),
        Shape::Double(_) => "f64".to_owned(),
        Shape::Float(_) => "f32".to_owned(),
        Shape::Enum(_) if enums.contains(short) => short.to_owned(),
        Shape::List(list) => {
            let inner = resolve_rust_type(model, &list.member.target, enums);
            format!("Vec<{inner}>")
        }
        Shape::Map(map) => {
            let key = resolve_rust_type(model, &map.key.target, enums);
            let value = resolve_rust_type(model, &map.value.target, enums);
            format!("HashMap<{key}, {value}>")
        }
        Shape::Structure(_) | Shape::Union(_) => rust_shape_name(short),
        _ => "String".to_owned(),
    }
}

fn resolve_builtin_type(target: &str) -> Option<&'static str> {
    match target {
        "smithy.api#String" => Some("String"),
        "smithy.api#Boolean" | "smithy.api#PrimitiveBoolean" => Some("bool"),
        "smithy.api#Integer" | "smithy.api#PrimitiveInteger" => Some("i32"),
        "smithy.api#Long" | "smithy.api#PrimitiveLong" => Some("i64"),
        "smithy.api#Float" | "smithy.api#PrimitiveFloat" => Some("f32"),
        "smithy.api#Double" | "smithy.api#PrimitiveDouble" => Some("f64"),
        "smithy.api#Blob" => Some("bytes::Bytes"),
        "smithy.api#Timestamp" => Some("chrono::DateTime<chrono::Utc>"),
        _ => None,
    }
}

fn extract_http_binding(member: &MemberShape) -> Option<HttpBinding> {
    if member.has_trait("smithy.api#httpLabel") {
        return Some(HttpBinding::Label);
    }
    if let Some(q) = member.trait_str("smithy.api#httpQuery") {
        return Some(HttpBinding::Query(q.to_owned()));
    }
    if let Some(h) = member.trait_str("smithy.api#httpHeader") {
        return Some(HttpBinding::Header(h.to_owned()));
    }
    if member.has_trait("smithy.api#httpPayload") {
        return Some(HttpBinding::Payload);
    }
    member
        .trait_str("smithy.api#httpPrefixHeaders")
        .map(|p| HttpBinding::PrefixHeaders(p.to_owned()))
}

/// Convert a Smithy member name to a Rust field name.
fn to_snake_case(name: &str) -> String {
    use heck::ToSnakeCase;
    let snake = name.to_snake_case();
    match snake.as_str() {
        "type" | "match" | "return" | "use" => format!("r#{snake}"),
        _ => snake,
    }
}

fn to_pascal_case(name: &str) -> String {
    use heck::ToPascalCase;
    name.to_pascal_case()
}

fn collect_referenced_shapes(
    model: &SmithyModel,
    shape_id: &str,
    visited: &mut BTreeSet<String>,
    depth: usize,
) {
    if depth > MAX_RESOLVE_DEPTH || shape_id.starts_with("smithy.api#") {
        return;
    }
    if !visited.insert(shape_id.to_owned()) {
        return;
    }
    let Some(shape) = model.shapes.get(shape_id) else {
        return;
    };

    match shape {
        Shape::Structure(s) | Shape::Union(s) => {
            for member in s.members.values() {
                collect_referenced_shapes(model, &member.target, visited, depth + 1);
            }
        }
        Shape::List(l) => collect_referenced_shapes(model, &l.member.target, visited, depth + 1),
        Shape::Map(m) => {
            collect_referenced_shapes(model, &m.key.target, visited, depth + 1);
            collect_referenced_shapes(model, &m.value.target, visited, depth + 1);
        }
        _ => {}
    }
}

fn is_collection_type(ty: &str) -> bool {
    ty.starts_with("Vec<") || ty.starts_with("HashMap<")
}

/// Resolve the members of a structure or union.
///
/// Union members are all optional. Collections are never wrapped in
/// `Option` and never count as required.
fn resolve_fields(
    model: &SmithyModel,
    shape: &AggregateShape,
    is_union: bool,
    enums: &BTreeSet<String>,
) -> Vec<FieldInfo> {
    let sorted: BTreeMap<&String, &MemberShape> = shape.members.iter().collect();

    sorted
        .into_iter()
        .map(|(name, member)| {
            let base = resolve_rust_type(model, &member.target, enums);
            let collection = is_collection_type(&base);
            let required = !is_union && !collection && member.has_trait("smithy.api#required");
            let rust_type = if required || collection {
                base
            } else {
                format!("Option<{base}>")
            };
            FieldInfo {
                rust_name: to_snake_case(name),
                rust_type,
                required,
                sensitive: model.is_sensitive(member),
                http_binding: extract_http_binding(member),
            }
        })
        .collect()
}

/// Resolve every shape reachable from [`TARGET_OPERATIONS`].
pub fn resolve_model(model: &SmithyModel) -> Result<ResolvedModel> {
    let mut operations = Vec::new();
    let mut referenced = BTreeSet::new();
    let mut io_shapes = BTreeMap::new();

    for op_name in TARGET_OPERATIONS {
        let shape_id = format!("{S3_NAMESPACE}{op_name}");
        let shape = model
            .shapes
            .get(&shape_id)
            .with_context(|| format!("Operation {op_name} not found in model"))?;
        let Shape::Operation(op) = shape else {
            anyhow::bail!("{op_name} is not an operation shape");
        };

        let input = op.input.as_ref().map(|r| r.target.as_str()).filter(|t| *t != UNIT_SHAPE);
        let output = op.output.as_ref().map(|r| r.target.as_str()).filter(|t| *t != UNIT_SHAPE);

        for (target, is_request) in [(input, true), (output, false)] {
            if let Some(target) = target {
                collect_referenced_shapes(model, target, &mut referenced, 0);
                io_shapes.insert(target.to_owned(), ((*op_name).to_owned(), is_request));
            }
        }

        operations.push(OperationInfo {
            name: (*op_name).to_owned(),
            result: output.map(|_| format!("{op_name}Result")),
        });
    }

    let mut enums = BTreeMap::new();
    for shape_id in &referenced {
        if let Some(Shape::Enum(enum_shape)) = model.shapes.get(shape_id) {
            let mut variants: Vec<EnumVariantInfo> = enum_shape
                .members
                .iter()
                .map(|(variant, member)| EnumVariantInfo {
                    rust_name: to_pascal_case(variant),
                    string_value: member
                        .trait_str("smithy.api#enumValue")
                        .unwrap_or(variant)
                        .to_owned(),
                })
                .collect();
            variants.sort_by(|a, b| a.rust_name.cmp(&b.rust_name));
            enums.insert(SmithyModel::short_name(shape_id).to_owned(), variants);
        }
    }
    let enum_names: BTreeSet<String> = enums.keys().cloned().collect();

    let mut shared_structs = BTreeMap::new();
    let mut requests = BTreeMap::new();
    let mut results = BTreeMap::new();

    for shape_id in &referenced {
        let (aggregate, is_union) = match model.shapes.get(shape_id) {
            Some(Shape::Structure(s)) => (s, false),
            Some(Shape::Union(u)) => (u, true),
            _ => continue,
        };
        if aggregate.traits.contains_key("smithy.api#error") {
            continue;
        }

        let fields = resolve_fields(model, aggregate, is_union, &enum_names);
        match io_shapes.get(shape_id) {
            Some((op, is_request)) => {
                let (name, target) = if *is_request {
                    (format!("{op}Request"), &mut requests)
                } else {
                    (format!("{op}Result"), &mut results)
                };
                target.insert(
                    name,
                    OperationStruct {
                        operation: op.clone(),
                        category: category_of(op),
                        fields,
                    },
                );
            }
            None => {
                let name = rust_shape_name(SmithyModel::short_name(shape_id));
                shared_structs.insert(name, fields);
            }
        }
    }

    Ok(ResolvedModel {
        operations,
        enums,
        shared_structs,
        requests,
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_categorize_operations() {
        assert_eq!(category_of("HeadBucket"), "bucket");
        assert_eq!(category_of("RestoreObject"), "object");
        assert_eq!(category_of("ListParts"), "multipart");
        assert_eq!(category_of("ListObjectsV2"), "list");
        assert_eq!(category_of("ListBucketMetricsConfigurations"), "analytics");
        assert_eq!(category_of("PutBucketIntelligentTieringConfiguration"), "analytics");
        assert_eq!(category_of("GetBucketReplication"), "config");
        assert_eq!(category_of("GetObjectTagging"), "config");
    }

    #[test]
    fn test_should_rename_colliding_shapes() {
        assert_eq!(rust_shape_name("CopyObjectResult"), "CopyObjectResultDetails");
        assert_eq!(rust_shape_name("Error"), "DeleteError");
        assert_eq!(rust_shape_name("Tag"), "Tag");
    }

    #[test]
    fn test_should_escape_keyword_members() {
        assert_eq!(to_snake_case("Type"), "r#type");
        assert_eq!(to_snake_case("SSECustomerKey"), "sse_customer_key");
        assert_eq!(to_pascal_case("GLACIER_IR"), "GlacierIr");
    }

    #[test]
    fn test_should_list_each_operation_once() {
        let unique: BTreeSet<_> = TARGET_OPERATIONS.iter().collect();
        assert_eq!(unique.len(), TARGET_OPERATIONS.len());
        assert!(!TARGET_OPERATIONS.contains(&"PostObject"));
    }
}
