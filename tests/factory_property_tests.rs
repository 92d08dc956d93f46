//! Property tests for identifier derivation and default synthesis

use proptest::prelude::*;

use ivy_module_metadata::{
    InterningIdentifierFactory, ModuleIdentifierFactory, MutableModuleMetadataFactory,
};
mod common;
use common::*;

/// Any non-empty coordinate segment, whitespace-only ones included
fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9][a-zA-Z0-9._-]{0,24}",
        "[ \t]{1,4}",
        "[ a-z.]{1,12}",
    ]
}

proptest! {
    #[test]
    fn derived_identifier_fields_match_coordinate(
        group in segment(),
        module in segment(),
        version in segment(),
    ) {
        let md = factory().create(&coordinate(&group, &module, &version)).unwrap();
        prop_assert_eq!(md.id().group(), group.as_str());
        prop_assert_eq!(md.id().name(), module.as_str());
        prop_assert_eq!(md.id().version(), version.as_str());
    }

    #[test]
    fn derivation_is_idempotent(
        group in segment(),
        module in segment(),
        version in segment(),
    ) {
        let identifiers = InterningIdentifierFactory::new();
        let a = identifiers.module_with_version(&group, &module, &version).unwrap();
        let b = identifiers.module_with_version(&group, &module, &version).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn default_shape_for_any_coordinate(
        group in segment(),
        module in segment(),
        version in segment(),
        missing in any::<bool>(),
    ) {
        let factory = factory();
        let id = coordinate(&group, &module, &version);
        let md = if missing { factory.missing(&id) } else { factory.create(&id) }.unwrap();

        prop_assert_eq!(md.is_missing(), missing);
        prop_assert_eq!(md.configurations().len(), 1);
        let conf = &md.configurations()[0];
        prop_assert_eq!(conf.name.as_str(), "default");
        prop_assert!(conf.visible && conf.transitive && conf.extends_from.is_empty());

        prop_assert_eq!(md.artifacts().len(), 1);
        let artifact = &md.artifacts()[0];
        prop_assert_eq!(artifact.artifact_name.name.as_str(), module.as_str());
        prop_assert_eq!(artifact.artifact_name.artifact_type.as_str(), "jar");
        prop_assert_eq!(artifact.artifact_name.extension.as_deref(), Some("jar"));
        prop_assert!(artifact.configurations.iter().map(String::as_str).eq(["default"]));
        prop_assert!(md.excludes().is_empty());
        prop_assert!(md.dependencies().is_empty());
    }
}
