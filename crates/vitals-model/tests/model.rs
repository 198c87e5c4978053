use uuid::Uuid;
use vitals_model::{
    CanonicalRecord, EntityType, FieldValue, Meal, RecordMeta, WeightEntry, schema_for,
};

fn weight() -> WeightEntry {
    WeightEntry {
        meta: RecordMeta::default(),
        entry_date: "2025-09-01".to_string(),
        meal: Meal::Lunch,
        value: Some(70.5),
        unit: "kg".to_string(),
        source: None,
        menu: Some("Rice, dal".to_string()),
        symptoms: None,
        calories: Some(0.0),
        fat: None,
        protein: None,
        notes: None,
    }
}

#[test]
fn canonical_record_json_is_tagged_and_flat() {
    let id = Uuid::new_v4();
    let mut entry = weight();
    entry.meta = RecordMeta::with_id(id);
    let record = CanonicalRecord::Weight(entry);

    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["entity"], "weight");
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["meal"], "lunch");
    assert!(json.get("created_at").is_none());

    let round: CanonicalRecord = serde_json::from_value(json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn field_values_cover_every_declared_field() {
    let record = CanonicalRecord::Weight(weight());
    let values = record.field_values();
    let declared: Vec<&str> = schema_for(EntityType::Weight).field_names().collect();
    let names: Vec<&str> = values.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, declared);
    assert_eq!(values[1].1, FieldValue::text("lunch"));
    assert_eq!(record.get("calories").render(), "0");
    assert_eq!(record.get("fat").render(), "");
}

#[test]
fn primary_date_follows_entity() {
    let record = CanonicalRecord::Weight(weight());
    assert_eq!(record.date(), "2025-09-01");
    assert_eq!(record.entity_type().date_field(), "entry_date");
}
