//! Built-in grammar for ECSchema 3.2 XML.

use std::sync::LazyLock;

use super::rule::{AttributeRule, ChildRule, GrammarRule, GrammarTable, ValueType};
use super::TokenType;

/// The ECSchema 3.2 grammar table.
pub fn ecschema_3_2() -> &'static GrammarTable {
    static TABLE: LazyLock<GrammarTable> = LazyLock::new(|| {
        GrammarTable::new(ECSCHEMA_3_2_RULES.iter().copied())
            .unwrap_or_else(|err| panic!("built-in ECSchema 3.2 grammar is invalid: {err}"))
    });
    &TABLE
}

// ============================================================================
// ATTRIBUTES
// ============================================================================

const EC_SCHEMA_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("schemaName", ValueType::String, "The name of the schema."),
    AttributeRule::required("alias", ValueType::String, "The alias of the schema."),
    AttributeRule::required("version", ValueType::String, "The version of the schema."),
    AttributeRule::required("description", ValueType::String, "A description of the schema."),
    AttributeRule::required("displayLabel", ValueType::String, "The display label of the schema."),
    AttributeRule::required("xmlns", ValueType::String, "The XML namespace of the schema."),
];

const EC_SCHEMA_REFERENCE_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("name", ValueType::String, "The name of the referenced schema."),
    AttributeRule::required("version", ValueType::String, "The version of the referenced schema."),
    AttributeRule::required("alias", ValueType::String, "The alias of the referenced schema."),
];

const EC_CUSTOM_ATTRIBUTE_CLASS_ATTRS: &[AttributeRule] = &[
    AttributeRule::required(
        "typeName",
        ValueType::String,
        "The name of the custom attribute class.",
    ),
    AttributeRule::optional(
        "description",
        ValueType::String,
        "A description of the custom attribute class.",
    ),
    AttributeRule::optional(
        "modifier",
        ValueType::String,
        "The modifier of the custom attribute class.",
    ),
    AttributeRule::required(
        "appliesTo",
        ValueType::String,
        "Specifies what the custom attribute can be applied to.",
    ),
];

const EC_ENUMERATION_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the enumeration."),
    AttributeRule::required(
        "backingTypeName",
        ValueType::String,
        "The backing type of the enumeration.",
    ),
    AttributeRule::optional("description", ValueType::String, "A description of the enumeration."),
    AttributeRule::optional(
        "displayLabel",
        ValueType::String,
        "The display label of the enumeration.",
    ),
    AttributeRule::optional(
        "isStrict",
        ValueType::Boolean,
        "Indicates if the enumeration is strict.",
    ),
];

const EC_ENUMERATOR_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("name", ValueType::String, "The name of the enumerator."),
    AttributeRule::required("value", ValueType::String, "The value of the enumerator."),
    AttributeRule::optional(
        "displayLabel",
        ValueType::String,
        "The display label of the enumerator.",
    ),
];

const EC_ENTITY_CLASS_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the entity class."),
    AttributeRule::optional("description", ValueType::String, "A description of the entity class."),
    AttributeRule::optional(
        "displayLabel",
        ValueType::String,
        "The display label of the entity class.",
    ),
    AttributeRule::optional("modifier", ValueType::String, "The modifier of the entity class."),
];

const EC_STRUCT_CLASS_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the struct class."),
    AttributeRule::optional("description", ValueType::String, "A description of the struct class."),
    AttributeRule::optional(
        "displayLabel",
        ValueType::String,
        "The display label of the struct class.",
    ),
];

const EC_PROPERTY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("propertyName", ValueType::String, "The name of the property."),
    AttributeRule::required("typeName", ValueType::String, "The type of the property."),
    AttributeRule::optional(
        "displayLabel",
        ValueType::String,
        "The display label of the property.",
    ),
    AttributeRule::optional("description", ValueType::String, "A description of the property."),
    AttributeRule::optional(
        "readOnly",
        ValueType::Boolean,
        "Indicates if the property is read-only.",
    ),
];

const EC_ARRAY_PROPERTY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("propertyName", ValueType::String, "The name of the array property."),
    AttributeRule::required("typeName", ValueType::String, "The type of the array property."),
    AttributeRule::optional(
        "readOnly",
        ValueType::Boolean,
        "Indicates if the array property is read-only.",
    ),
    AttributeRule::optional("minOccurs", ValueType::Number, "The minimum number of occurrences."),
    AttributeRule::optional("maxOccurs", ValueType::String, "The maximum number of occurrences."),
];

const EC_STRUCT_PROPERTY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("propertyName", ValueType::String, "The name of the struct property."),
    AttributeRule::required("typeName", ValueType::String, "The type of the struct property."),
    AttributeRule::optional(
        "readOnly",
        ValueType::Boolean,
        "Indicates if the struct property is read-only.",
    ),
];

const EC_STRUCT_ARRAY_PROPERTY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required(
        "propertyName",
        ValueType::String,
        "The name of the struct array property.",
    ),
    AttributeRule::required(
        "typeName",
        ValueType::String,
        "The type of the struct array property.",
    ),
    AttributeRule::optional(
        "readOnly",
        ValueType::Boolean,
        "Indicates if the struct array property is read-only.",
    ),
    AttributeRule::optional("minOccurs", ValueType::Number, "The minimum number of occurrences."),
    AttributeRule::optional("maxOccurs", ValueType::String, "The maximum number of occurrences."),
];

const EC_NAVIGATION_PROPERTY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required(
        "propertyName",
        ValueType::String,
        "The name of the navigation property.",
    ),
    AttributeRule::optional("relationshipName", ValueType::String, "The name of the relationship."),
    AttributeRule::optional("direction", ValueType::String, "The direction of the relationship."),
    AttributeRule::optional(
        "readOnly",
        ValueType::Boolean,
        "Indicates if the navigation property is read-only.",
    ),
];

const EC_RELATIONSHIP_CLASS_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the relationship class."),
    AttributeRule::optional(
        "modifier",
        ValueType::String,
        "The modifier of the relationship class.",
    ),
    AttributeRule::optional("strength", ValueType::String, "The strength of the relationship."),
    AttributeRule::optional(
        "strengthDirection",
        ValueType::String,
        "The direction of the relationship strength.",
    ),
];

const SOURCE_ATTRS: &[AttributeRule] = &[
    AttributeRule::optional("multiplicity", ValueType::String, "The multiplicity of the source."),
    AttributeRule::required(
        "polymorphic",
        ValueType::Boolean,
        "Indicates if the source is polymorphic.",
    ),
    AttributeRule::optional("roleLabel", ValueType::String, "The role label of the source."),
];

const TARGET_ATTRS: &[AttributeRule] = &[
    AttributeRule::optional("multiplicity", ValueType::String, "The multiplicity of the target."),
    AttributeRule::required(
        "polymorphic",
        ValueType::Boolean,
        "Indicates if the target is polymorphic.",
    ),
    AttributeRule::optional("roleLabel", ValueType::String, "The role label of the target."),
];

const CLASS_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("class", ValueType::String, "The class of the source or target."),
];

const KIND_OF_QUANTITY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the kind of quantity."),
    AttributeRule::required(
        "persistenceUnit",
        ValueType::String,
        "The persistence unit of the kind of quantity.",
    ),
    AttributeRule::optional(
        "presentationUnits",
        ValueType::String,
        "The presentation units of the kind of quantity.",
    ),
    AttributeRule::optional(
        "relativeError",
        ValueType::String,
        "The relative error of the kind of quantity.",
    ),
];

const PROPERTY_CATEGORY_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the property category."),
    AttributeRule::required(
        "priority",
        ValueType::Number,
        "The priority of the property category.",
    ),
];

const FORMAT_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the format."),
    AttributeRule::optional("type", ValueType::String, "The type of the format."),
    AttributeRule::optional("precision", ValueType::Number, "The precision of the format."),
    AttributeRule::optional("roundFactor", ValueType::Number, "The round factor of the format."),
    AttributeRule::optional("minWidth", ValueType::Number, "The minimum width of the format."),
    AttributeRule::optional(
        "showSignOption",
        ValueType::String,
        "The show sign option of the format.",
    ),
    AttributeRule::optional(
        "decimalSeparator",
        ValueType::String,
        "The decimal separator of the format.",
    ),
    AttributeRule::optional(
        "thousandSeparator",
        ValueType::String,
        "The thousand separator of the format.",
    ),
    AttributeRule::optional(
        "uomSeparator",
        ValueType::String,
        "The unit of measure separator of the format.",
    ),
    AttributeRule::optional("formatTraits", ValueType::String, "The format traits of the format."),
    AttributeRule::optional(
        "scientificType",
        ValueType::String,
        "The scientific type of the format.",
    ),
    AttributeRule::optional(
        "stationOffsetSize",
        ValueType::Number,
        "The station offset size of the format.",
    ),
    AttributeRule::optional(
        "stationSeparator",
        ValueType::String,
        "The station separator of the format.",
    ),
];

const UNIT_SYSTEM_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the unit system."),
    AttributeRule::optional("description", ValueType::String, "A description of the unit system."),
    AttributeRule::optional(
        "displayLabel",
        ValueType::String,
        "The display label of the unit system.",
    ),
];

const UNIT_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the unit."),
    AttributeRule::required("phenomenon", ValueType::String, "The phenomenon of the unit."),
    AttributeRule::required("unitSystem", ValueType::String, "The unit system of the unit."),
    AttributeRule::required("definition", ValueType::String, "The definition of the unit."),
    AttributeRule::optional("numerator", ValueType::Number, "The numerator of the unit."),
    AttributeRule::optional("denominator", ValueType::Number, "The denominator of the unit."),
    AttributeRule::optional("offset", ValueType::Number, "The offset of the unit."),
];

const INVERTED_UNIT_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the inverted unit."),
    AttributeRule::required("invertsUnit", ValueType::String, "The unit that this unit inverts."),
    AttributeRule::required(
        "unitSystem",
        ValueType::String,
        "The unit system of the inverted unit.",
    ),
];

const CONSTANT_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the constant."),
    AttributeRule::required("phenomenon", ValueType::String, "The phenomenon of the constant."),
    AttributeRule::required("definition", ValueType::String, "The definition of the constant."),
    AttributeRule::optional("numerator", ValueType::Number, "The numerator of the constant."),
    AttributeRule::optional("denominator", ValueType::Number, "The denominator of the constant."),
];

const PHENOMENON_ATTRS: &[AttributeRule] = &[
    AttributeRule::required("typeName", ValueType::String, "The name of the phenomenon."),
    AttributeRule::required("definition", ValueType::String, "The definition of the phenomenon."),
];

// ============================================================================
// RULES
// ============================================================================

const ECSCHEMA_3_2_RULES: &[GrammarRule] = &[
    GrammarRule {
        name: "ECSchema",
        token_type: TokenType::Namespace,
        description: "Root element of the ECSchema XML.",
        attributes: EC_SCHEMA_ATTRS,
        children: ChildRule::Only(&[
            "ECSchemaReference",
            "ECCustomAttributes",
            "ECEntityClass",
            "ECCustomAttributeClass",
            "ECRelationshipClass",
            "ECStructClass",
            "ECEnumeration",
            "KindOfQuantity",
            "PropertyCategory",
            "Format",
            "UnitSystem",
            "Unit",
            "InvertedUnit",
            "Constant",
            "Phenomenon",
        ]),
        parents: None,
    },
    GrammarRule {
        name: "ECSchemaReference",
        token_type: TokenType::TypeParameter,
        description: "Allows one ECSchema to refer to others.",
        attributes: EC_SCHEMA_REFERENCE_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "ECCustomAttributeClass",
        token_type: TokenType::Class,
        description: "Defines a custom attribute class.",
        attributes: EC_CUSTOM_ATTRIBUTE_CLASS_ATTRS,
        children: ChildRule::Only(&["ECProperty"]),
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "ECCustomAttributes",
        token_type: TokenType::TypeParameter,
        description: "Contains custom attributes applied to an element.",
        attributes: &[],
        children: ChildRule::Any,
        parents: Some(&["ECSchema", "ECEntityClass", "ECStructClass", "ECProperty"]),
    },
    GrammarRule {
        name: "ECEnumeration",
        token_type: TokenType::Enum,
        description: "Defines an enumeration.",
        attributes: EC_ENUMERATION_ATTRS,
        children: ChildRule::Only(&["ECEnumerator"]),
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "ECEnumerator",
        token_type: TokenType::EnumMember,
        description: "Defines an enumerator within an enumeration.",
        attributes: EC_ENUMERATOR_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECEnumeration"]),
    },
    GrammarRule {
        name: "ECEntityClass",
        token_type: TokenType::Class,
        description: "Defines an entity class.",
        attributes: EC_ENTITY_CLASS_ATTRS,
        children: ChildRule::Only(&[
            "BaseClass",
            "ECCustomAttributes",
            "ECProperty",
            "ECArrayProperty",
            "ECStructProperty",
            "ECStructArrayProperty",
            "ECNavigationProperty",
        ]),
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "ECStructClass",
        token_type: TokenType::Class,
        description: "Defines a struct class.",
        attributes: EC_STRUCT_CLASS_ATTRS,
        children: ChildRule::Only(&[
            "BaseClass",
            "ECCustomAttributes",
            "ECProperty",
            "ECArrayProperty",
            "ECStructProperty",
            "ECStructArrayProperty",
            "ECNavigationProperty",
        ]),
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "BaseClass",
        token_type: TokenType::Interface,
        description: "Specifies the base class of the entity class.",
        attributes: &[],
        children: ChildRule::None,
        parents: Some(&["ECEntityClass", "ECStructClass"]),
    },
    GrammarRule {
        name: "ECProperty",
        token_type: TokenType::Property,
        description: "Defines a property within an entity class.",
        attributes: EC_PROPERTY_ATTRS,
        children: ChildRule::Only(&["ECCustomAttributes"]),
        parents: Some(&[
            "ECCustomAttributeClass",
            "ECEntityClass",
            "ECStructClass",
            "ECRelationshipClass",
        ]),
    },
    GrammarRule {
        name: "ECArrayProperty",
        token_type: TokenType::Property,
        description: "Defines an array property within an entity class.",
        attributes: EC_ARRAY_PROPERTY_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECEntityClass", "ECStructClass"]),
    },
    GrammarRule {
        name: "ECStructProperty",
        token_type: TokenType::Property,
        description: "Defines a struct property within an entity class.",
        attributes: EC_STRUCT_PROPERTY_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECEntityClass", "ECStructClass"]),
    },
    GrammarRule {
        name: "ECStructArrayProperty",
        token_type: TokenType::Property,
        description: "Defines a struct array property within an entity class.",
        attributes: EC_STRUCT_ARRAY_PROPERTY_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECEntityClass", "ECStructClass"]),
    },
    GrammarRule {
        name: "ECNavigationProperty",
        token_type: TokenType::Property,
        description: "Defines a navigation property within an entity class.",
        attributes: EC_NAVIGATION_PROPERTY_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECEntityClass", "ECStructClass"]),
    },
    GrammarRule {
        name: "ECRelationshipClass",
        token_type: TokenType::Class,
        description: "Defines a relationship class.",
        attributes: EC_RELATIONSHIP_CLASS_ATTRS,
        children: ChildRule::Only(&["ECProperty", "Source", "Target"]),
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "Source",
        token_type: TokenType::Type,
        description: "Defines the source of the relationship.",
        attributes: SOURCE_ATTRS,
        children: ChildRule::Only(&["Class"]),
        parents: Some(&["ECRelationshipClass"]),
    },
    GrammarRule {
        name: "Target",
        token_type: TokenType::Type,
        description: "Defines the target of the relationship.",
        attributes: TARGET_ATTRS,
        children: ChildRule::Only(&["Class"]),
        parents: Some(&["ECRelationshipClass"]),
    },
    GrammarRule {
        name: "Class",
        token_type: TokenType::Class,
        description: "Specifies the class of the source or target.",
        attributes: CLASS_ATTRS,
        children: ChildRule::None,
        parents: Some(&["Source", "Target"]),
    },
    GrammarRule {
        name: "KindOfQuantity",
        token_type: TokenType::Type,
        description: "Defines a kind of quantity.",
        attributes: KIND_OF_QUANTITY_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "PropertyCategory",
        token_type: TokenType::Type,
        description: "Defines a property category.",
        attributes: PROPERTY_CATEGORY_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "Format",
        token_type: TokenType::Type,
        description: "Defines a format.",
        attributes: FORMAT_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "UnitSystem",
        token_type: TokenType::Type,
        description: "Defines a unit system.",
        attributes: UNIT_SYSTEM_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "Unit",
        token_type: TokenType::Type,
        description: "Defines a unit.",
        attributes: UNIT_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "InvertedUnit",
        token_type: TokenType::Type,
        description: "Defines an inverted unit.",
        attributes: INVERTED_UNIT_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "Constant",
        token_type: TokenType::Type,
        description: "Defines a constant.",
        attributes: CONSTANT_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
    GrammarRule {
        name: "Phenomenon",
        token_type: TokenType::Type,
        description: "Defines a phenomenon.",
        attributes: PHENOMENON_ATTRS,
        children: ChildRule::None,
        parents: Some(&["ECSchema"]),
    },
];
