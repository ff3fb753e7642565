//! Runner de validación del registre HACCP: ejercita los almacenes y las
//! vistas derivadas de punta a punta sobre el doble en memoria, y termina con
//! una pasada sobre el backend durable en ficheros.

use chrono::NaiveDate;

use haccp_rust::{contrats_expires, montant_ttc, rappels, stats_contrats, stats_factures, stats_tableau};
use haccp_rust::{CategorieFacture, Classeur, ContratIntervenantDraft, ControleDraft, FactureDraft, FixedClock,
                 MemoryStorage, NettoyageDraft, Record, StatutControle, TypeControle, TypeIntervenant};
use haccp_rust::{FileStorage, StorageConfig};

fn aujourdhui() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

fn facture_draft(date: &str, ht: f64, tva: f64, categorie: CategorieFacture) -> FactureDraft {
    FactureDraft { date: date.parse().expect("valid date"),
                   numero: format!("F-{date}"),
                   fournisseur: "Metro".to_string(),
                   categorie,
                   montant_ht: ht,
                   montant_ttc: montant_ttc(ht, tva),
                   tva,
                   image_data: None,
                   notes: None }
}

fn contrat_draft(nom: &str, type_: TypeIntervenant, date_fin: &str) -> ContratIntervenantDraft {
    ContratIntervenantDraft { nom: nom.to_string(),
                              type_,
                              contact: "standard".to_string(),
                              telephone: "0600000000".to_string(),
                              email: "contact@exemple.fr".to_string(),
                              date_debut: "2024-01-01".parse().expect("valid date"),
                              date_fin: date_fin.parse().expect("valid date"),
                              frequence: "mensuelle".to_string(),
                              contrat_data: String::new(),
                              notes: None }
}

/// Validación: append/delete de registros con orden newest-first.
fn run_validation_stores() {
    let clock = FixedClock::at(aujourdhui());
    let mut classeur = Classeur::open_with_clock(MemoryStorage::new(), clock).expect("open classeur");

    classeur.controles
            .add(ControleDraft { date: aujourdhui(),
                                 type_: TypeControle::Temperature,
                                 valeur: "3.8".to_string(),
                                 statut: StatutControle::Conforme,
                                 action: None,
                                 commentaire: None })
            .expect("add controle");
    classeur.nettoyages
            .add(NettoyageDraft { date: aujourdhui(),
                                  zone: "plonge".to_string(),
                                  produit_utilise: "dégraissant".to_string(),
                                  realise: true,
                                  controle_visuel: true })
            .expect("add nettoyage");

    assert_eq!(classeur.controles.len(), 1);
    assert_eq!(classeur.menu.len(), 4, "default menu seeded on first open");

    // borrar un id inexistente no toca la colección
    assert!(!classeur.controles.delete("absent").expect("delete absent"));
    assert_eq!(classeur.controles.len(), 1);

    let id = classeur.controles.items()[0].id().as_str().to_string();
    assert!(classeur.controles.delete(&id).expect("delete controle"));
    assert!(classeur.controles.is_empty());

    println!("!Validación stores: OK (append, seed, delete idempotente)");
}

/// Validación: stats de facturas y agrupación del mes en curso.
fn run_validation_factures() {
    let clock = FixedClock::at(aujourdhui());
    let mut classeur = Classeur::open_with_clock(MemoryStorage::new(), clock).expect("open classeur");

    classeur.factures
            .add(facture_draft("2024-06-05", 100.0, 20.0, CategorieFacture::MatieresPremieres))
            .expect("add facture");
    classeur.factures
            .add(facture_draft("2024-05-12", 80.0, 20.0, CategorieFacture::Emballages))
            .expect("add facture");

    let stats = stats_factures(classeur.factures.items(), aujourdhui());
    assert_eq!(stats.total_factures, 2);
    assert_eq!(stats.factures_ce_mois, 1);
    assert_eq!(stats.montant_ce_mois, 120.0);
    println!("!Validación factures: OK (total={}, ce mois={} TTC {:.2})",
             stats.total_factures, stats.factures_ce_mois, stats.montant_ce_mois);
}

/// Validación: rappels de contrats (vencidos primero, horizonte de 60 días).
fn run_validation_contrats() {
    let clock = FixedClock::at(aujourdhui());
    let mut classeur = Classeur::open_with_clock(MemoryStorage::new(), clock).expect("open classeur");

    classeur.contrats
            .add(contrat_draft("DératExpress", TypeIntervenant::Deratisation, "2024-05-01"))
            .expect("add contrat");
    classeur.contrats
            .add(contrat_draft("FroidService", TypeIntervenant::MaintenanceFrigo, "2024-06-15"))
            .expect("add contrat");
    classeur.contrats
            .add(contrat_draft("Plomberie 2000", TypeIntervenant::Plombier, "2024-09-01"))
            .expect("add contrat");

    let rappels = rappels(classeur.contrats.items(), aujourdhui());
    assert_eq!(rappels.len(), 2, "the 92-days-out contract stays off the list");
    assert_eq!(rappels[0].jours_restants, -31);
    assert_eq!(rappels[1].jours_restants, 14);
    assert!(rappels[1].est_urgent);

    let expires = contrats_expires(classeur.contrats.items(), aujourdhui());
    assert_eq!(expires.len(), 1);

    let stats = stats_contrats(classeur.contrats.items(), aujourdhui());
    assert_eq!(stats.actifs, 2);

    for rappel in &rappels {
        let etat = if rappel.jours_restants < 0 {
            "expiré"
        } else if rappel.est_urgent {
            "urgent"
        } else {
            "à venir"
        };
        println!("  rappel: {} ({} j) [{}]", rappel.contrat.nom, rappel.jours_restants, etat);
    }
    println!("!Validación contrats: OK (rappels triés, expirés inclus)");
}

/// Validación: tableau de bord del día.
fn run_validation_tableau() {
    let clock = FixedClock::at(aujourdhui());
    let mut classeur = Classeur::open_with_clock(MemoryStorage::new(), clock).expect("open classeur");
    classeur.controles
            .add(ControleDraft { date: aujourdhui(),
                                 type_: TypeControle::Proprete,
                                 valeur: "sol gras".to_string(),
                                 statut: StatutControle::NonConforme,
                                 action: Some("re-nettoyage".to_string()),
                                 commentaire: None })
            .expect("add controle");

    let stats = stats_tableau(classeur.controles.items(),
                              classeur.produits.items(),
                              classeur.nettoyages.items(),
                              classeur.formations.items(),
                              aujourdhui());
    assert_eq!(stats.controles_jour, 1);
    assert_eq!(stats.non_conformites, 1);
    println!("!Validación tableau: OK ({} non-conformité à traiter)", stats.non_conformites);
}

/// Pasada durable: mismas operaciones sobre el backend en ficheros.
fn run_demo_persistencia() {
    let config = StorageConfig::from_env();
    println!("persistencia: directorio de datos {}", config.data_dir.display());

    let mut classeur = Classeur::open(FileStorage::from_config(&config)).expect("open durable classeur");
    classeur.factures
            .add(facture_draft("2024-06-10", 42.0, 20.0, CategorieFacture::Services))
            .expect("add facture durable");
    let total = classeur.factures.len();

    // reabrir reproduce el contenido persistido
    let reopened = Classeur::open(FileStorage::from_config(&config)).expect("reopen durable classeur");
    assert_eq!(reopened.factures.len(), total);
    println!("!Demo persistencia: OK ({total} facture(s) en disco)");
}

fn main() {
    run_validation_stores();
    run_validation_factures();
    run_validation_contrats();
    run_validation_tableau();
    run_demo_persistencia();
    println!("Registre HACCP: todas las validaciones OK");
}
