#[cfg(test)]
mod tests {
    use stowage::entities::{Consignment, ContainerSpec, Item, Manifest, PolicySpec, Probe};
    use stowage::errors::StowageError;
    use stowage::io::ext_repr::ExtManifest;
    use stowage::io::import::import_manifest;

    fn spec(id: u64, policy: PolicySpec) -> ContainerSpec {
        ContainerSpec { id, policy }
    }

    #[test]
    fn duplicate_container_ids_are_rejected() {
        let result = Manifest::new(
            "duplicates".into(),
            vec![spec(1, PolicySpec::SingleItem), spec(1, PolicySpec::Misplacing)],
            vec![],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn consignments_must_target_declared_containers() {
        let result = Manifest::new(
            "dangling consignment".into(),
            vec![spec(1, PolicySpec::SingleItem)],
            vec![Consignment {
                container_id: 99,
                items: vec![Item::new("rope", 1)],
            }],
            vec![],
        );
        assert!(result.is_err());
    }

    #[test]
    fn probes_must_target_declared_containers() {
        let result = Manifest::new(
            "dangling probe".into(),
            vec![spec(1, PolicySpec::SingleItem)],
            vec![],
            vec![Probe {
                container_id: 2,
                item: Item::new("rope", 1),
            }],
        );
        assert!(result.is_err());
    }

    #[test]
    fn commission_builds_the_declared_fleet() {
        let manifest = Manifest::new(
            "fleet".into(),
            vec![
                spec(7, PolicySpec::WeightLimited { capacity: 1 }),
                spec(9, PolicySpec::SingleItem),
            ],
            vec![],
            vec![],
        )
        .unwrap();

        let fleet = manifest.commission();
        assert_eq!(fleet.len(), 2);

        // the policies came out in declaration order
        let brick = Item::new("brick", 2);
        assert!(!fleet[0].can_add(&brick));
        assert!(fleet[1].can_add(&brick));

        assert_eq!(manifest.container_index(9), Some(1));
        assert_eq!(manifest.container_index(8), None);
    }

    #[test]
    fn manifest_json_imports_with_defaults() {
        let raw = r#"{
            "name": "minimal",
            "containers": [
                {"id": 0, "policy": {"type": "weight_limited", "capacity": 10}},
                {"id": 1, "policy": {"type": "single_item"}},
                {"id": 2, "policy": {"type": "misplacing"}}
            ],
            "consignments": [
                {"container": 0, "items": [{"name": "paperweight"}, {"name": "anvil", "weight": 9}]}
            ]
        }"#;

        let ext: ExtManifest = serde_json::from_str(raw).unwrap();
        let manifest = import_manifest(&ext).unwrap();

        assert_eq!(manifest.name, "minimal");
        assert_eq!(manifest.containers.len(), 3);
        assert_eq!(
            manifest.containers[0].policy,
            PolicySpec::WeightLimited { capacity: 10 }
        );
        assert_eq!(manifest.containers[1].policy, PolicySpec::SingleItem);
        assert_eq!(manifest.containers[2].policy, PolicySpec::Misplacing);

        // omitted weight defaults to 0, omitted probes to none
        assert_eq!(manifest.consignments[0].items[0].weight, 0);
        assert_eq!(manifest.consignments[0].items[1].weight, 9);
        assert!(manifest.probes.is_empty());
        assert_eq!(manifest.total_item_qty(), 2);
    }

    #[test]
    fn whitespace_named_items_import_and_fail_at_admission() {
        let raw = r#"{
            "name": "quirky",
            "containers": [{"id": 0, "policy": {"type": "misplacing"}}],
            "consignments": [{"container": 0, "items": [{"name": "   ", "weight": 4}]}]
        }"#;

        let ext: ExtManifest = serde_json::from_str(raw).unwrap();
        let manifest = import_manifest(&ext).unwrap();

        // import classifies the item exactly as admission will
        let quirk = &manifest.consignments[0].items[0];
        assert!(!quirk.is_named());

        let mut container = manifest.containers[0].policy.build();
        assert_eq!(
            container.add(quirk.clone()),
            Err(StowageError::InvalidItem { weight: 4 })
        );
    }

    #[test]
    fn import_rejects_dangling_references() {
        let raw = r#"{
            "name": "broken",
            "containers": [{"id": 0, "policy": {"type": "single_item"}}],
            "consignments": [{"container": 3, "items": [{"name": "rope", "weight": 1}]}]
        }"#;

        let ext: ExtManifest = serde_json::from_str(raw).unwrap();
        assert!(import_manifest(&ext).is_err());
    }
}
