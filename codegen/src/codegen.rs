//! Rust code generation from resolved Smithy shapes.
//!
//! Produces the generated half of `s3sdk-model`: `types.rs`, the `request/`
//! and `result/` modules, `operations.rs` and `error.rs`. The hand-written
//! modules (`lib.rs`, `blob.rs`, `envelope.rs`, `exception.rs`) are not
//! touched.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::Result;

use crate::shapes::{EnumVariantInfo, FieldInfo, HttpBinding, OperationStruct, ResolvedModel};

/// Header comment placed at the top of every generated file.
const FILE_HEADER: &str = "//! Auto-generated from AWS S3 Smithy model. DO NOT EDIT.";

/// Width rustfmt wraps at.
const MAX_WIDTH: usize = 100;

/// Module order inside `request/` and `result/`.
const CATEGORIES: &[&str] = &["analytics", "bucket", "config", "list", "multipart", "object"];

/// Well-known error codes: `(code, default message, HTTP status)`.
const ERROR_CODES: &[(&str, &str, u16)] = &[
    ("AccessDenied", "Access Denied", 403),
    ("AccountProblem", "There is a problem with the account", 403),
    ("BadDigest", "The Content-MD5 you specified did not match what we received", 400),
    ("BucketAlreadyExists", "The requested bucket name is not available", 409),
    ("BucketAlreadyOwnedByYou", "The bucket is already owned by you", 409),
    ("BucketNotEmpty", "The bucket you tried to delete is not empty", 409),
    ("ConditionalRequestConflict", "The conditional request cannot be processed", 409),
    ("EntityTooLarge", "Your proposed upload exceeds the maximum allowed size", 400),
    ("EntityTooSmall", "Your proposed upload is smaller than the minimum allowed size", 400),
    ("ExpiredToken", "The provided token has expired", 400),
    ("InternalError", "Internal server error", 500),
    ("InvalidAccessKeyId", "The access key Id you provided does not exist in our records", 403),
    ("InvalidArgument", "Invalid Argument", 400),
    ("InvalidBucketName", "The specified bucket is not valid", 400),
    ("InvalidBucketState", "The request is not valid with the current state of the bucket", 409),
    ("InvalidDigest", "The Content-MD5 you specified is not valid", 400),
    ("InvalidLocationConstraint", "The specified location constraint is not valid", 400),
    ("InvalidObjectState", "The operation is not valid for the current state of the object", 403),
    ("InvalidPart", "One or more of the specified parts could not be found", 400),
    ("InvalidPartOrder", "The list of parts was not in ascending order", 400),
    ("InvalidRange", "The requested range cannot be satisfied", 416),
    ("InvalidRequest", "Invalid Request", 400),
    ("InvalidStorageClass", "The storage class you specified is not valid", 400),
    ("InvalidToken", "The provided token is malformed or otherwise invalid", 400),
    ("KeyTooLongError", "Your key is too long", 400),
    ("MalformedXML", "The XML you provided was not well-formed", 400),
    ("MaxMessageLengthExceeded", "Your request was too big", 400),
    ("MetadataTooLarge", "Your metadata headers exceed the maximum allowed metadata size", 400),
    ("MethodNotAllowed", "The specified method is not allowed against this resource", 405),
    ("MissingContentLength", "You must provide the Content-Length HTTP header", 411),
    ("NoSuchBucket", "The specified bucket does not exist", 404),
    ("NoSuchBucketPolicy", "The specified bucket does not have a bucket policy", 404),
    ("NoSuchCORSConfiguration", "The CORS configuration does not exist", 404),
    ("NoSuchConfiguration", "The specified configuration does not exist", 404),
    ("NoSuchKey", "The specified key does not exist", 404),
    ("NoSuchLifecycleConfiguration", "The lifecycle configuration does not exist", 404),
    (
        "NoSuchObjectLockConfiguration",
        "Object Lock configuration does not exist for this bucket",
        404,
    ),
    (
        "NoSuchPublicAccessBlockConfiguration",
        "The public access block configuration was not found",
        404,
    ),
    ("NoSuchTagSet", "The TagSet does not exist", 404),
    ("NoSuchUpload", "The specified multipart upload does not exist", 404),
    ("NoSuchVersion", "The specified version does not exist", 404),
    ("NoSuchWebsiteConfiguration", "The website configuration does not exist", 404),
    ("NotImplemented", "The functionality is not implemented", 501),
    ("NotModified", "Not Modified", 304),
    (
        "ObjectNotInActiveTierError",
        "The source object of the COPY operation is not in the active tier",
        403,
    ),
    ("OwnershipControlsNotFoundError", "The bucket ownership controls were not found", 404),
    ("PreconditionFailed", "At least one of the preconditions you specified did not hold", 412),
    ("ReplicationConfigurationNotFoundError", "The replication configuration was not found", 404),
    (
        "RequestTimeTooSkewed",
        "The difference between the request time and the server's time is too large",
        403,
    ),
    (
        "RequestTimeout",
        "Your socket connection to the server was not read from or written to within the timeout period",
        400,
    ),
    ("RestoreAlreadyInProgress", "Object restore is already in progress", 409),
    (
        "ServerSideEncryptionConfigurationNotFoundError",
        "The server-side encryption configuration was not found",
        404,
    ),
    ("ServiceUnavailable", "Reduce your request rate", 503),
    ("SignatureDoesNotMatch", "The request signature does not match", 403),
    ("SlowDown", "Please reduce your request rate", 503),
    ("TooManyBuckets", "You have attempted to create more buckets than allowed", 400),
    ("XAmzContentSHA256Mismatch", "The provided x-amz-content-sha256 header does not match", 400),
];

/// Generate all source files and return them as a map of path -> content.
pub fn generate_all(resolved: &ResolvedModel) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    files.insert("types.rs".to_owned(), generate_types(resolved)?);
    files.insert("operations.rs".to_owned(), generate_operations(resolved)?);
    files.insert("error.rs".to_owned(), generate_error()?);
    generate_operation_modules(&mut files, Kind::Request, &resolved.requests, resolved)?;
    generate_operation_modules(&mut files, Kind::Result, &resolved.results, resolved)?;

    Ok(files)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Request,
    Result,
}

impl Kind {
    fn module(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Result => "result",
        }
    }

    fn struct_doc(self, operation: &str) -> String {
        match self {
            Self::Request => format!("Request parameters for the `{operation}` operation."),
            Self::Result => format!("Result of the `{operation}` operation."),
        }
    }

    fn payload_doc(self) -> &'static str {
        match self {
            Self::Request => "Request body.",
            Self::Result => "Response body.",
        }
    }
}

/// How a field's accessors are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    String,
    OptString,
    Copy,
    OptCopy,
    OptBlob,
    Ref,
    OptRef,
    Vec,
    Map,
}

/// Split a field type into its accessor kind and the type it wraps.
fn field_kind<'a>(ty: &'a str, resolved: &ResolvedModel) -> (FieldKind, &'a str) {
    let is_copy = |t: &str| {
        matches!(t, "bool" | "i32" | "i64" | "chrono::DateTime<chrono::Utc>")
            || resolved.enums.contains_key(t)
    };

    if let Some(inner) = ty.strip_prefix("Option<").and_then(|t| t.strip_suffix('>')) {
        let kind = match inner {
            "String" => FieldKind::OptString,
            "StreamingBlob" => FieldKind::OptBlob,
            t if is_copy(t) => FieldKind::OptCopy,
            _ => FieldKind::OptRef,
        };
        return (kind, inner);
    }
    if let Some(inner) = ty.strip_prefix("Vec<").and_then(|t| t.strip_suffix('>')) {
        return (FieldKind::Vec, inner);
    }
    if ty.starts_with("HashMap<") {
        return (FieldKind::Map, ty);
    }
    match ty {
        "String" => (FieldKind::String, ty),
        t if is_copy(t) => (FieldKind::Copy, ty),
        _ => (FieldKind::Ref, ty),
    }
}

fn base_name(rust_name: &str) -> &str {
    rust_name.strip_prefix("r#").unwrap_or(rust_name)
}

/// Render a function signature, breaking parameters onto their own lines
/// when the one-line form is too wide.
fn fn_sig(indent: &str, head: &str, params: &[String], ret: &str) -> String {
    let one_line = format!("{indent}{head}({}){ret} {{", params.join(", "));
    if one_line.len() <= MAX_WIDTH {
        return one_line;
    }
    let mut out = format!("{indent}{head}(\n");
    for param in params {
        let _ = writeln!(out, "{indent}    {param},");
    }
    let _ = write!(out, "{indent}){ret} {{");
    out
}

/// Render a `use path::{..};` line, wrapping like rustfmt.
fn use_line(path: &str, items: &[String]) -> String {
    if let [item] = items {
        return format!("use {path}::{item};");
    }
    let one_line = format!("use {path}::{{{}}};", items.join(", "));
    if one_line.len() <= MAX_WIDTH {
        return one_line;
    }
    let mut out = format!("use {path}::{{\n");
    let mut line = String::from("   ");
    for item in items {
        if line.len() + item.len() + 2 > MAX_WIDTH {
            let _ = writeln!(out, "{line}");
            line = String::from("   ");
        }
        let _ = write!(line, " {item},");
    }
    let _ = write!(out, "{line}\n}};");
    out
}

fn finish(mut out: String) -> String {
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

/// Generate types.rs with all shared enums and structs.
fn generate_types(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::with_capacity(256 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out, "use std::str::FromStr;")?;
    writeln!(out)?;
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;
    writeln!(out, "use crate::exception::ParseEnumError;")?;
    writeln!(out)?;
    writeln!(out, "/// Rendered in place of sensitive members by `Debug` implementations.")?;
    writeln!(
        out,
        "pub(crate) const SENSITIVE_DATA_REDACTED: &str = \"*** Sensitive Data Redacted ***\";"
    )?;
    writeln!(out)?;

    for (name, variants) in &resolved.enums {
        write_enum(&mut out, name, variants)?;
    }
    for (name, fields) in &resolved.shared_structs {
        write_struct(&mut out, name, &format!("S3 {name}."), fields, resolved)?;
    }

    Ok(finish(out))
}

fn write_enum(out: &mut String, name: &str, variants: &[EnumVariantInfo]) -> Result<()> {
    writeln!(out, "/// S3 {name} enum.")?;
    writeln!(
        out,
        "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]"
    )?;
    writeln!(out, "pub enum {name} {{")?;
    for (i, variant) in variants.iter().enumerate() {
        if i == 0 {
            writeln!(out, "    /// Default variant.")?;
            writeln!(out, "    #[default]")?;
        }
        if variant.rust_name != variant.string_value {
            writeln!(out, "    #[serde(rename = \"{}\")]", variant.string_value)?;
        }
        writeln!(out, "    {},", variant.rust_name)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl {name} {{")?;
    writeln!(out, "    /// Returns the string value of this enum variant.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub const fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for v in variants {
        writeln!(out, "            Self::{} => \"{}\",", v.rust_name, v.string_value)?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    /// Returns every variant in declaration order.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub const fn values() -> &'static [Self] {{")?;
    let all: Vec<String> = variants.iter().map(|v| format!("Self::{}", v.rust_name)).collect();
    let one_line = format!("        &[{}]", all.join(", "));
    if one_line.len() <= MAX_WIDTH {
        writeln!(out, "{one_line}")?;
    } else {
        writeln!(out, "        &[")?;
        for v in &all {
            writeln!(out, "            {v},")?;
        }
        writeln!(out, "        ]")?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    write_display(out, name)?;

    writeln!(out, "impl FromStr for {name} {{")?;
    writeln!(out, "    type Err = ParseEnumError;")?;
    writeln!(out)?;
    writeln!(out, "    fn from_str(s: &str) -> Result<Self, Self::Err> {{")?;
    writeln!(out, "        match s {{")?;
    for v in variants {
        writeln!(out, "            \"{}\" => Ok(Self::{}),", v.string_value, v.rust_name)?;
    }
    writeln!(out, "            _ => Err(ParseEnumError::new(\"{name}\", s)),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

fn write_display(out: &mut String, name: &str) -> Result<()> {
    writeln!(out, "impl fmt::Display for {name} {{")?;
    writeln!(out, "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{")?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

fn binding_doc(binding: &HttpBinding, kind: Kind) -> String {
    match binding {
        HttpBinding::Label => "URI path label.".to_owned(),
        HttpBinding::Query(q) => format!("Query parameter `{q}`."),
        HttpBinding::Header(h) => format!("Header `{h}`."),
        HttpBinding::Payload => kind.payload_doc().to_owned(),
        HttpBinding::PrefixHeaders(p) => format!("Headers prefixed with `{p}`."),
    }
}

/// Write a struct with its constructor, accessors and, when it holds
/// sensitive members, a redacting `Debug`.
fn write_struct(
    out: &mut String,
    name: &str,
    doc: &str,
    fields: &[FieldInfo],
    resolved: &ResolvedModel,
) -> Result<()> {
    write_struct_with_docs(out, name, doc, fields, None, resolved)
}

fn write_struct_with_docs(
    out: &mut String,
    name: &str,
    doc: &str,
    fields: &[FieldInfo],
    kind: Option<Kind>,
    resolved: &ResolvedModel,
) -> Result<()> {
    let sensitive = fields.iter().any(|f| f.sensitive);

    writeln!(out, "/// {doc}")?;
    if sensitive {
        writeln!(out, "#[derive(Clone, Default, PartialEq, Eq)]")?;
    } else {
        writeln!(out, "#[derive(Debug, Clone, Default, PartialEq, Eq)]")?;
    }
    if fields.is_empty() {
        writeln!(out, "pub struct {name} {{}}")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "pub struct {name} {{")?;
    for field in fields {
        if let (Some(kind), Some(binding)) = (kind, &field.http_binding) {
            writeln!(out, "    /// {}", binding_doc(binding, kind))?;
        }
        writeln!(out, "    pub {}: {},", field.rust_name, field.rust_type)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    let mut methods: Vec<String> = Vec::new();
    let required: Vec<&FieldInfo> = fields.iter().filter(|f| f.required).collect();
    if !required.is_empty() {
        methods.push(constructor(name, fields.len(), &required, resolved));
    }
    for field in fields {
        accessors(&mut methods, field, resolved);
    }

    writeln!(out, "impl {name} {{")?;
    writeln!(out, "{}", methods.join("\n\n"))?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    if sensitive {
        write_redacting_debug(out, name, fields, resolved)?;
    }
    Ok(())
}

fn constructor(
    name: &str,
    field_count: usize,
    required: &[&FieldInfo],
    resolved: &ResolvedModel,
) -> String {
    let params: Vec<String> = required
        .iter()
        .map(|f| match field_kind(&f.rust_type, resolved) {
            (FieldKind::String, _) => format!("{}: impl Into<String>", f.rust_name),
            (_, ty) => format!("{}: {ty}", f.rust_name),
        })
        .collect();

    let mut m = String::new();
    let _ = writeln!(m, "    /// Creates a `{name}` from its required members.");
    let _ = writeln!(m, "    #[must_use]");
    let _ = writeln!(m, "{}", fn_sig("    ", "pub fn new", &params, " -> Self"));
    let _ = writeln!(m, "        Self {{");
    for f in required {
        if field_kind(&f.rust_type, resolved).0 == FieldKind::String {
            let _ = writeln!(m, "            {0}: {0}.into(),", f.rust_name);
        } else {
            let _ = writeln!(m, "            {},", f.rust_name);
        }
    }
    if required.len() < field_count {
        let _ = writeln!(m, "            ..Default::default()");
    }
    let _ = writeln!(m, "        }}");
    let _ = write!(m, "    }}");
    m
}

fn accessors(methods: &mut Vec<String>, field: &FieldInfo, resolved: &ResolvedModel) {
    let n = field.rust_name.as_str();
    let b = base_name(n);
    let ty = field.rust_type.as_str();
    let (kind, inner) = field_kind(ty, resolved);

    let (ret, body) = match kind {
        FieldKind::String => ("&str".to_owned(), format!("&self.{n}")),
        FieldKind::OptString => ("Option<&str>".to_owned(), format!("self.{n}.as_deref()")),
        FieldKind::Copy | FieldKind::OptCopy => (ty.to_owned(), format!("self.{n}")),
        FieldKind::OptBlob | FieldKind::OptRef => {
            (format!("Option<&{inner}>"), format!("self.{n}.as_ref()"))
        }
        FieldKind::Ref => (format!("&{inner}"), format!("&self.{n}")),
        FieldKind::Vec => (format!("&[{inner}]"), format!("&self.{n}")),
        FieldKind::Map => ("&HashMap<String, String>".to_owned(), format!("&self.{n}")),
    };
    methods.push(format!(
        "    #[must_use]\n{}\n        {body}\n    }}",
        fn_sig("    ", &format!("pub fn {n}"), &["&self".to_owned()], &format!(" -> {ret}"))
    ));

    let (param, mut value) = match kind {
        FieldKind::String | FieldKind::OptString => {
            (format!("{n}: impl Into<String>"), format!("{n}.into()"))
        }
        FieldKind::OptBlob => (format!("{n}: impl Into<StreamingBlob>"), format!("{n}.into()")),
        FieldKind::Vec => (
            format!("{n}: impl IntoIterator<Item = {inner}>"),
            format!("{n}.into_iter().collect()"),
        ),
        FieldKind::OptCopy | FieldKind::OptRef => (format!("{n}: {inner}"), n.to_owned()),
        FieldKind::Copy | FieldKind::Ref | FieldKind::Map => (format!("{n}: {ty}"), n.to_owned()),
    };
    if matches!(
        kind,
        FieldKind::OptString | FieldKind::OptCopy | FieldKind::OptBlob | FieldKind::OptRef
    ) {
        value = format!("Some({value})");
    }
    methods.push(format!(
        "    #[must_use]\n{}\n        self.{n} = {value};\n        self\n    }}",
        fn_sig("    ", &format!("pub fn with_{b}"), &["mut self".to_owned(), param], " -> Self")
    ));

    if kind == FieldKind::Map {
        let sig = fn_sig(
            "    ",
            &format!("pub fn add_{b}_entry"),
            &[
                "mut self".to_owned(),
                "key: impl Into<String>".to_owned(),
                "value: impl Into<String>".to_owned(),
            ],
            " -> Result<Self, DuplicateKeyError>",
        );
        methods.push(format!(
            "    /// Adds a single `{b}` entry, failing if the key is already present.\n\
             {sig}\n\
             \x20       let key = key.into();\n\
             \x20       if self.{n}.contains_key(&key) {{\n\
             \x20           return Err(DuplicateKeyError::new(\"{b}\", key));\n\
             \x20       }}\n\
             \x20       self.{n}.insert(key, value.into());\n\
             \x20       Ok(self)\n\
             \x20   }}"
        ));
        methods.push(format!(
            "    /// Removes every `{b}` entry.\n\
             \x20   #[must_use]\n\
             \x20   pub fn clear_{b}_entries(mut self) -> Self {{\n\
             \x20       self.{n}.clear();\n\
             \x20       self\n\
             \x20   }}"
        ));
    }
}

fn write_redacting_debug(
    out: &mut String,
    name: &str,
    fields: &[FieldInfo],
    resolved: &ResolvedModel,
) -> Result<()> {
    writeln!(out, "impl fmt::Debug for {name} {{")?;
    writeln!(out, "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{")?;
    writeln!(out, "        f.debug_struct(\"{name}\")")?;
    for field in fields {
        let n = field.rust_name.as_str();
        let label = base_name(n);
        if !field.sensitive {
            writeln!(out, "            .field(\"{label}\", &self.{n})")?;
            continue;
        }
        let optional = matches!(
            field_kind(&field.rust_type, resolved).0,
            FieldKind::OptString | FieldKind::OptCopy | FieldKind::OptBlob | FieldKind::OptRef
        );
        if !optional {
            writeln!(out, "            .field(\"{label}\", &SENSITIVE_DATA_REDACTED)")?;
            continue;
        }
        let redacted = format!("&self.{n}.as_ref().map(|_| SENSITIVE_DATA_REDACTED)");
        let line = format!("            .field(\"{label}\", {redacted})");
        if line.len() <= MAX_WIDTH {
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "            .field(")?;
            writeln!(out, "                \"{label}\",")?;
            writeln!(out, "                {redacted},")?;
            writeln!(out, "            )")?;
        }
    }
    writeln!(out, "            .finish()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    Ok(())
}

/// Generate `request/` or `result/`: a `mod.rs` plus one file per category.
fn generate_operation_modules(
    files: &mut BTreeMap<String, String>,
    kind: Kind,
    structs: &BTreeMap<String, OperationStruct>,
    resolved: &ResolvedModel,
) -> Result<()> {
    let module = kind.module();
    let present: Vec<&str> = CATEGORIES
        .iter()
        .copied()
        .filter(|cat| structs.values().any(|s| s.category == *cat))
        .collect();

    let mut mod_out = String::with_capacity(1024);
    writeln!(mod_out, "{FILE_HEADER}")?;
    writeln!(mod_out)?;
    for cat in &present {
        writeln!(mod_out, "mod {cat};")?;
    }
    writeln!(mod_out)?;
    for cat in &present {
        writeln!(mod_out, "pub use {cat}::*;")?;
    }
    files.insert(format!("{module}/mod.rs"), mod_out);

    for cat in present {
        let members: Vec<(&String, &OperationStruct)> =
            structs.iter().filter(|(_, s)| s.category == cat).collect();
        let all_fields = || members.iter().flat_map(|(_, s)| s.fields.iter());

        let needs_map = all_fields().any(|f| f.rust_type.contains("HashMap"));
        let needs_blob = all_fields().any(|f| f.rust_type.contains("StreamingBlob"));
        let needs_redaction = all_fields().any(|f| f.sensitive);

        let mut out = String::with_capacity(64 * 1024);
        writeln!(out, "{FILE_HEADER}")?;
        writeln!(out)?;

        if needs_map || needs_redaction {
            if needs_map {
                writeln!(out, "use std::collections::HashMap;")?;
            }
            if needs_redaction {
                writeln!(out, "use std::fmt;")?;
            }
            writeln!(out)?;
        }

        let mut type_refs = BTreeSet::new();
        for field in all_fields() {
            collect_type_references(&field.rust_type, resolved, &mut type_refs);
        }
        let mut type_items: Vec<String> = Vec::new();
        if needs_redaction {
            type_items.push("SENSITIVE_DATA_REDACTED".to_owned());
        }
        type_items.extend(type_refs);

        if needs_blob || needs_map || !type_items.is_empty() {
            if needs_blob {
                writeln!(out, "use crate::blob::StreamingBlob;")?;
            }
            if needs_map {
                writeln!(out, "use crate::exception::DuplicateKeyError;")?;
            }
            if !type_items.is_empty() {
                writeln!(out, "{}", use_line("crate::types", &type_items))?;
            }
            writeln!(out)?;
        }

        for (name, s) in members {
            write_struct_with_docs(
                &mut out,
                name,
                &kind.struct_doc(&s.operation),
                &s.fields,
                Some(kind),
                resolved,
            )?;
        }

        files.insert(format!("{module}/{cat}.rs"), finish(out));
    }

    Ok(())
}

/// Collect generated model type names used in a Rust type expression.
fn collect_type_references(rust_type: &str, resolved: &ResolvedModel, refs: &mut BTreeSet<String>) {
    for token in rust_type.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == ':')) {
        if resolved.is_model_type(token) {
            refs.insert(token.to_owned());
        }
    }
}

/// Generate operations.rs with the S3Operation enum.
fn generate_operations(resolved: &ResolvedModel) -> Result<String> {
    let ops: Vec<&str> = resolved.operations.iter().map(|o| o.name.as_str()).collect();
    let unit: Vec<&str> = resolved
        .operations
        .iter()
        .filter(|o| o.result.is_none())
        .map(|o| o.name.as_str())
        .collect();

    let mut out = String::with_capacity(16 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out, "use std::str::FromStr;")?;
    writeln!(out)?;
    writeln!(out, "use crate::exception::ParseEnumError;")?;
    writeln!(out)?;

    writeln!(out, "/// All supported S3 operations.")?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum S3Operation {{")?;
    for op in &ops {
        writeln!(out, "    /// The {op} operation.")?;
        writeln!(out, "    {op},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl S3Operation {{")?;
    writeln!(out, "    /// Every operation, in declaration order.")?;
    writeln!(out, "    pub const ALL: &'static [Self] = &[")?;
    for op in &ops {
        writeln!(out, "        Self::{op},")?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;
    writeln!(out, "    /// Returns the operation name as a string.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub const fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for op in &ops {
        writeln!(out, "            Self::{op} => \"{op}\",")?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    /// Parse an operation name string into an `S3Operation`.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{")?;
    writeln!(out, "        match name {{")?;
    for op in &ops {
        writeln!(out, "            \"{op}\" => Some(Self::{op}),")?;
    }
    writeln!(out, "            _ => None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    /// Returns `true` if the operation carries a result payload.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub const fn has_result(&self) -> bool {{")?;
    writeln!(out, "        !matches!(")?;
    writeln!(out, "            self,")?;
    for (i, op) in unit.iter().enumerate() {
        let prefix = if i == 0 { "            " } else { "                | " };
        writeln!(out, "{prefix}Self::{op}")?;
    }
    writeln!(out, "        )")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for S3Operation {{")?;
    writeln!(out, "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{")?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl FromStr for S3Operation {{")?;
    writeln!(out, "    type Err = ParseEnumError;")?;
    writeln!(out)?;
    writeln!(out, "    fn from_str(s: &str) -> Result<Self, Self::Err> {{")?;
    writeln!(
        out,
        "        Self::from_name(s).ok_or_else(|| ParseEnumError::new(\"S3Operation\", s))"
    )?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

fn status_const(status: u16) -> &'static str {
    match status {
        304 => "NOT_MODIFIED",
        400 => "BAD_REQUEST",
        403 => "FORBIDDEN",
        404 => "NOT_FOUND",
        405 => "METHOD_NOT_ALLOWED",
        409 => "CONFLICT",
        411 => "LENGTH_REQUIRED",
        412 => "PRECONDITION_FAILED",
        416 => "RANGE_NOT_SATISFIABLE",
        501 => "NOT_IMPLEMENTED",
        503 => "SERVICE_UNAVAILABLE",
        _ => "INTERNAL_SERVER_ERROR",
    }
}

/// Generate error.rs with the S3ErrorCode enum.
fn generate_error() -> Result<String> {
    let mut out = String::with_capacity(32 * 1024);
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;

    writeln!(out, "/// Well-known S3 error codes.")?;
    writeln!(out, "///")?;
    writeln!(out, "/// The service may return codes outside this set; those are preserved in")?;
    writeln!(out, "/// [`S3ErrorCode::Other`].")?;
    writeln!(out, "#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]")?;
    writeln!(out, "#[non_exhaustive]")?;
    writeln!(out, "pub enum S3ErrorCode {{")?;
    for (i, (code, _, _)) in ERROR_CODES.iter().enumerate() {
        if i == 0 {
            writeln!(out, "    /// Default error code.")?;
            writeln!(out, "    #[default]")?;
        }
        writeln!(out, "    /// {code} error.")?;
        writeln!(out, "    {code},")?;
    }
    writeln!(out, "    /// An error code not in the well-known set.")?;
    writeln!(out, "    Other(String),")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl S3ErrorCode {{")?;
    writeln!(out, "    /// Returns the error code as a string.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &str {{")?;
    writeln!(out, "        match self {{")?;
    for (code, _, _) in ERROR_CODES {
        writeln!(out, "            Self::{code} => \"{code}\",")?;
    }
    writeln!(out, "            Self::Other(s) => s,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(
        out,
        "    /// Maps a wire error code to a known variant, keeping unknown codes as [`Self::Other`]."
    )?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_code(code: &str) -> Self {{")?;
    writeln!(out, "        match code {{")?;
    for (code, _, _) in ERROR_CODES {
        writeln!(out, "            \"{code}\" => Self::{code},")?;
    }
    writeln!(out, "            other => Self::Other(other.to_owned()),")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Returns the default HTTP status code for this error.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    #[allow(clippy::match_same_arms)]")?;
    writeln!(out, "    pub fn default_status_code(&self) -> http::StatusCode {{")?;
    writeln!(out, "        match self {{")?;
    // One arm per status keeps clippy::match_same_arms quiet.
    let mut by_status: BTreeMap<u16, Vec<&str>> = BTreeMap::new();
    for (code, _, status) in ERROR_CODES {
        by_status.entry(*status).or_default().push(code);
    }
    for (status, codes) in &by_status {
        let target = status_const(*status);
        if let [code] = codes.as_slice() {
            writeln!(out, "            Self::{code} => http::StatusCode::{target},")?;
            continue;
        }
        for (i, code) in codes.iter().enumerate() {
            let prefix = if i == 0 { "            " } else { "            | " };
            let suffix = if i + 1 == codes.len() {
                format!(" => http::StatusCode::{target},")
            } else {
                String::new()
            };
            writeln!(out, "{prefix}Self::{code}{suffix}")?;
        }
    }
    writeln!(out, "            Self::Other(_) => http::StatusCode::INTERNAL_SERVER_ERROR,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Returns the default message for this error.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn default_message(&self) -> &str {{")?;
    writeln!(out, "        match self {{")?;
    for (code, msg, _) in ERROR_CODES {
        let line = format!("            Self::{code} => \"{msg}\",");
        if line.len() <= MAX_WIDTH {
            writeln!(out, "{line}")?;
        } else {
            writeln!(out, "            Self::{code} => {{")?;
            writeln!(out, "                \"{msg}\"")?;
            writeln!(out, "            }}")?;
        }
    }
    writeln!(out, "            Self::Other(s) => s,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    write_display(&mut out, "S3ErrorCode")?;

    writeln!(out, "impl From<&str> for S3ErrorCode {{")?;
    writeln!(out, "    fn from(code: &str) -> Self {{")?;
    writeln!(out, "        Self::from_code(code)")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_model() -> ResolvedModel {
        ResolvedModel {
            operations: Vec::new(),
            enums: BTreeMap::from([(
                "Tier".to_owned(),
                vec![EnumVariantInfo {
                    rust_name: "Bulk".to_owned(),
                    string_value: "Bulk".to_owned(),
                }],
            )]),
            shared_structs: BTreeMap::new(),
            requests: BTreeMap::new(),
            results: BTreeMap::new(),
        }
    }

    fn field(name: &str, ty: &str, required: bool, sensitive: bool) -> FieldInfo {
        FieldInfo {
            rust_name: name.to_owned(),
            rust_type: ty.to_owned(),
            required,
            sensitive,
            http_binding: None,
        }
    }

    #[test]
    fn test_should_classify_field_kinds() {
        let model = empty_model();
        assert_eq!(field_kind("Option<String>", &model), (FieldKind::OptString, "String"));
        assert_eq!(field_kind("Option<Tier>", &model), (FieldKind::OptCopy, "Tier"));
        assert_eq!(field_kind("Vec<Tag>", &model), (FieldKind::Vec, "Tag"));
        assert_eq!(field_kind("i64", &model), (FieldKind::Copy, "i64"));
        assert_eq!(field_kind("Destination", &model).0, FieldKind::Ref);
    }

    #[test]
    fn test_should_emit_constructor_for_required_members() {
        let model = empty_model();
        let mut out = String::new();
        let fields = [
            field("bucket", "String", true, false),
            field("tier", "Option<Tier>", false, false),
        ];
        write_struct(&mut out, "Sample", "S3 Sample.", &fields, &model).expect("write");
        assert!(out.contains("pub fn new(bucket: impl Into<String>) -> Self {"));
        assert!(out.contains("..Default::default()"));
        assert!(out.contains("pub fn tier(&self) -> Option<Tier> {"));
        assert!(out.contains("self.tier = Some(tier);"));
    }

    #[test]
    fn test_should_redact_sensitive_members() {
        let model = empty_model();
        let mut out = String::new();
        let fields = [field("key_id", "String", true, true)];
        write_struct(&mut out, "Secret", "S3 Secret.", &fields, &model).expect("write");
        assert!(out.contains("#[derive(Clone, Default, PartialEq, Eq)]"));
        assert!(out.contains(".field(\"key_id\", &SENSITIVE_DATA_REDACTED)"));
    }

    #[test]
    fn test_should_wrap_long_use_lines() {
        let items: Vec<String> = (0..20).map(|i| format!("TypeNumber{i}")).collect();
        let line = use_line("crate::types", &items);
        assert!(line.lines().all(|l| l.len() <= MAX_WIDTH));
        assert!(line.ends_with("};"));
    }

    #[test]
    fn test_should_keep_error_codes_sorted() {
        let codes: Vec<&str> = ERROR_CODES.iter().map(|(c, _, _)| *c).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }
}
