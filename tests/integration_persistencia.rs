//! Integración almacén ↔ backend en ficheros: round-trip, reapertura y
//! degradación ante contenido corrupto.

use std::fs;

use chrono::NaiveDate;
use haccp_rust::{Classeur, ControleDraft, FileStorage, FixedClock, ProduitDraft, Record, StatutControle,
                 TypeControle};

fn juin() -> FixedClock {
    FixedClock::at(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
}

fn controle_draft(valeur: &str) -> ControleDraft {
    ControleDraft { date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                    type_: TypeControle::Temperature,
                    valeur: valeur.to_string(),
                    statut: StatutControle::Conforme,
                    action: None,
                    commentaire: None }
}

#[test]
fn reopening_reproduces_content_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut classeur = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    classeur.controles.add(controle_draft("2.0")).unwrap();
    classeur.controles.add(controle_draft("5.5")).unwrap();
    classeur.produits
            .add(ProduitDraft { nom: "Poulet".to_string(),
                                fournisseur: "Metro".to_string(),
                                date_reception: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                                dlc: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
                                temperature_reception: Some("2.5".to_string()),
                                conforme: true,
                                allergenes: vec!["gluten".to_string()] })
            .unwrap();
    let controles = classeur.controles.items().to_vec();
    let produits = classeur.produits.items().to_vec();

    let reopened = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    assert_eq!(reopened.controles.items(), controles.as_slice());
    assert_eq!(reopened.produits.items(), produits.as_slice());
    assert_eq!(reopened.controles.items()[0].valeur, "5.5", "newest-first survives the round trip");
}

#[test]
fn each_collection_gets_its_own_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut classeur = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    classeur.controles.add(controle_draft("4.0")).unwrap();

    assert!(dir.path().join("haccp_controles.json").is_file());
    assert!(dir.path().join("haccp_menu.json").is_file(), "seeded menu persists at open");
    assert!(!dir.path().join("haccp_factures.json").exists(), "untouched collections write nothing");
}

#[test]
fn stored_json_uses_the_documented_field_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut classeur = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    classeur.controles.add(controle_draft("4.0")).unwrap();

    let raw = fs::read_to_string(dir.path().join("haccp_controles.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let record = &parsed.as_array().unwrap()[0];
    assert_eq!(record["type"], "temperature");
    assert_eq!(record["statut"], "conforme");
    assert_eq!(record["date"], "2024-06-01");
}

#[test]
fn corrupted_entry_degrades_to_empty_without_touching_others() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut classeur = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
        classeur.controles.add(controle_draft("4.0")).unwrap();
        classeur.produits
                .add(ProduitDraft { nom: "Salade".to_string(),
                                    fournisseur: "Primeur".to_string(),
                                    date_reception: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                                    dlc: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                                    temperature_reception: None,
                                    conforme: true,
                                    allergenes: vec![] })
                .unwrap();
    }
    fs::write(dir.path().join("haccp_controles.json"), "{broken json").unwrap();

    let reopened = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    assert!(reopened.controles.is_empty(), "corrupt collection opens empty");
    assert_eq!(reopened.produits.len(), 1, "other collections stay independently consistent");
}

#[test]
fn add_then_delete_leaves_the_durable_collection_as_before() {
    let dir = tempfile::tempdir().unwrap();
    let mut classeur = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    classeur.controles.add(controle_draft("base")).unwrap();
    let before = classeur.controles.items().to_vec();

    classeur.controles.add(controle_draft("éphémère")).unwrap();
    let id = classeur.controles.items()[0].id().as_str().to_string();
    assert!(classeur.controles.delete(&id).unwrap());
    assert_eq!(classeur.controles.items(), before.as_slice());

    let reopened = Classeur::open_with_clock(FileStorage::new(dir.path()), juin()).unwrap();
    assert_eq!(reopened.controles.items(), before.as_slice());
}
