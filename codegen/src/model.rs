//! Smithy 2.0 JSON AST types.
//!
//! Only the parts of the AST the S3 generator reads are modelled. Shape
//! kinds the generator never emits are folded into [`Shape::Other`].

use std::collections::HashMap;

use serde::Deserialize;

/// Trait map attached to shapes and members.
pub type Traits = HashMap<String, serde_json::Value>;

/// Top-level Smithy model document.
#[derive(Debug, Deserialize)]
pub struct SmithyModel {
    /// Smithy IDL version, e.g. `"2.0"`.
    pub smithy: String,
    /// Every shape in the model keyed by absolute shape ID.
    pub shapes: HashMap<String, Shape>,
}

/// A Smithy shape, tagged by its `type` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Structure(AggregateShape),
    Union(AggregateShape),
    Operation(OperationShape),
    Enum(AggregateShape),
    List(ListShape),
    Map(MapShape),
    String(SimpleShape),
    Boolean(SimpleShape),
    Integer(SimpleShape),
    Long(SimpleShape),
    Timestamp(SimpleShape),
    Blob(SimpleShape),
    Double(SimpleShape),
    Float(SimpleShape),
    /// Services, resources, int enums and documents.
    #[serde(other)]
    Other,
}

/// A scalar shape that only carries traits.
#[derive(Debug, Default, Deserialize)]
pub struct SimpleShape {
    #[serde(default)]
    pub traits: Traits,
}

/// A shape with named members: structures, unions and enums.
#[derive(Debug, Deserialize)]
pub struct AggregateShape {
    #[serde(default)]
    pub members: HashMap<String, MemberShape>,
    #[serde(default)]
    pub traits: Traits,
}

/// A member of an aggregate shape.
#[derive(Debug, Deserialize)]
pub struct MemberShape {
    /// Absolute ID of the member's target shape.
    pub target: String,
    #[serde(default)]
    pub traits: Traits,
}

/// An operation shape.
#[derive(Debug, Deserialize)]
pub struct OperationShape {
    pub input: Option<ShapeRef>,
    pub output: Option<ShapeRef>,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct ListShape {
    pub member: ShapeRef,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Deserialize)]
pub struct MapShape {
    pub key: ShapeRef,
    pub value: ShapeRef,
    #[serde(default)]
    pub traits: Traits,
}

impl Shape {
    /// Traits applied to this shape, if its kind carries any.
    pub fn traits(&self) -> Option<&Traits> {
        match self {
            Self::Structure(s) | Self::Union(s) | Self::Enum(s) => Some(&s.traits),
            Self::Operation(s) => Some(&s.traits),
            Self::List(s) => Some(&s.traits),
            Self::Map(s) => Some(&s.traits),
            Self::String(s)
            | Self::Boolean(s)
            | Self::Integer(s)
            | Self::Long(s)
            | Self::Timestamp(s)
            | Self::Blob(s)
            | Self::Double(s)
            | Self::Float(s) => Some(&s.traits),
            Self::Other => None,
        }
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.traits().is_some_and(|t| t.contains_key(name))
    }
}

impl MemberShape {
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.contains_key(name)
    }

    /// String value of a trait such as `smithy.api#httpHeader`.
    pub fn trait_str(&self, name: &str) -> Option<&str> {
        self.traits.get(name).and_then(serde_json::Value::as_str)
    }
}

impl SmithyModel {
    /// Short name of an absolute shape ID: `com.amazonaws.s3#BucketName` is
    /// `BucketName`.
    pub fn short_name(shape_id: &str) -> &str {
        shape_id.rsplit_once('#').map_or(shape_id, |(_, name)| name)
    }

    /// Whether a member or the shape it targets is marked `@sensitive`.
    pub fn is_sensitive(&self, member: &MemberShape) -> bool {
        member.has_trait(SENSITIVE_TRAIT)
            || self
                .shapes
                .get(&member.target)
                .is_some_and(|shape| shape.has_trait(SENSITIVE_TRAIT))
    }
}

const SENSITIVE_TRAIT: &str = "smithy.api#sensitive";

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "smithy": "2.0",
        "shapes": {
            "com.amazonaws.s3#SSECustomerKey": {
                "type": "string",
                "traits": { "smithy.api#sensitive": {} }
            },
            "com.amazonaws.s3#Tier": {
                "type": "enum",
                "members": {
                    "Standard": {
                        "target": "smithy.api#Unit",
                        "traits": { "smithy.api#enumValue": "Standard" }
                    }
                }
            },
            "com.amazonaws.s3#AmazonS3": { "type": "service", "version": "2006-03-01" }
        }
    }"#;

    #[test]
    fn test_should_parse_shape_kinds() {
        let model: SmithyModel = serde_json::from_str(MODEL).expect("valid model");
        assert_eq!(model.smithy, "2.0");
        assert!(matches!(
            model.shapes.get("com.amazonaws.s3#Tier"),
            Some(Shape::Enum(_))
        ));
        assert!(matches!(
            model.shapes.get("com.amazonaws.s3#AmazonS3"),
            Some(Shape::Other)
        ));
    }

    #[test]
    fn test_should_detect_sensitive_target() {
        let model: SmithyModel = serde_json::from_str(MODEL).expect("valid model");
        let member = MemberShape {
            target: "com.amazonaws.s3#SSECustomerKey".to_owned(),
            traits: Traits::new(),
        };
        assert!(model.is_sensitive(&member));
        assert_eq!(SmithyModel::short_name(&member.target), "SSECustomerKey");
    }
}
