//! Tests de propriétés (campagne) : invariants du pipeline complet.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - bornes r petites (cas limites) et moyennes

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::canon::canoniser;
use super::correction::{corriger, est_correct};
use super::eval::calculer;
use super::format::{vers_affichage, vers_calculable};
use super::generateur::{generer, respecte_domaine, MAX_OPERATEURS};
use super::lot::generer_lot;

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

#[test]
fn prop_domaine_entier_respecte() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    for r in [2u64, 3, 5, 10, 50] {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE ^ r);
        for _ in 0..300 {
            budget(t0, max);
            let e = generer(&mut rng, r).unwrap();
            assert!(respecte_domaine(&e), "r={r} e={e}");
            assert!(e.profondeur() <= MAX_OPERATEURS, "r={r} e={e}");
        }
    }
}

#[test]
fn prop_rendu_puis_evaluation_egale_valeur_de_l_arbre() {
    let mut rng = StdRng::seed_from_u64(0xBADC0DE);

    for _ in 0..400 {
        let e = generer(&mut rng, 12).unwrap();
        let texte = canoniser(&e.to_string());
        match (e.valeur(), calculer(&texte)) {
            (Ok(v), Ok(rep)) => assert_eq!(&v, rep.valeur(), "texte={texte:?}"),
            (Err(a), Err(b)) => assert_eq!(a, b, "texte={texte:?}"),
            (a, b) => panic!("désaccord arbre/texte: {a:?} vs {b:?} pour {texte:?}"),
        }
    }
}

#[test]
fn prop_lot_taille_exacte_pour_toute_borne() {
    let t0 = Instant::now();
    let max = Duration::from_secs(10);

    for r in 2u64..=12 {
        budget(t0, max);
        let mut rng = StdRng::seed_from_u64(r);
        let lot = generer_lot(&mut rng, 100, r).unwrap();
        assert_eq!(lot.len(), 100, "r={r}");
        assert_eq!(lot.reponses().len(), 100, "r={r}");
    }
}

#[test]
fn prop_canon_idempotent() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..300 {
        let brut = generer(&mut rng, 20).unwrap().to_string();
        let une = canoniser(&brut);
        assert_eq!(canoniser(&une), une, "brut={brut:?}");
    }
}

#[test]
fn prop_aller_retour_evaluateur() {
    let mut rng = StdRng::seed_from_u64(31337);
    let lot = generer_lot(&mut rng, 150, 10).unwrap();

    for (probleme, reponse) in lot.paires() {
        // forme canonique
        assert_eq!(&calculer(probleme).unwrap(), reponse);

        // forme affichée (fichier) puis retour en calculable
        let affiche = vers_affichage(probleme);
        assert!(!affiche.contains('*'), "{affiche}");
        assert_eq!(vers_calculable(&affiche), probleme);
        assert_eq!(&calculer(&affiche).unwrap(), reponse);
    }
}

#[test]
fn prop_correction_de_ses_propres_reponses() {
    let mut rng = StdRng::seed_from_u64(8);
    let lot = generer_lot(&mut rng, 60, 9).unwrap();

    let exercices: Vec<String> = lot
        .problemes()
        .map(|p| format!("{} =", vers_affichage(p)))
        .collect();
    let reponses: Vec<String> = lot.reponses().iter().map(|r| r.to_string()).collect();

    let bilan = corriger(&exercices, &reponses);
    assert_eq!(bilan.corrects.len(), 60);
    assert!(bilan.faux.is_empty());

    // une réponse décalée => faux
    assert!(!est_correct(&exercices[0], "999999'1/2"));
}

#[test]
fn prop_meme_graine_meme_lot() {
    let a = generer_lot(&mut StdRng::seed_from_u64(1234), 40, 10).unwrap();
    let b = generer_lot(&mut StdRng::seed_from_u64(1234), 40, 10).unwrap();

    assert!(a.paires().eq(b.paires()));
}
