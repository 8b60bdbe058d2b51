// src/app.rs
//
// Exercices Q-pur — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (args.rs + fichiers.rs + journal.rs)
// - Relier la ligne de commande au noyau (génération / correction)
//
// Important:
// - Aucun calcul ici : le noyau fait tout, l’app ne fait que lire/écrire.

pub mod args;
pub mod fichiers;
pub mod journal;

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::noyau::lot::generer_lot;
use args::Reglages;

/// RNG injecté : graine fixe si fournie, sinon entropie système.
pub fn rng_depuis(graine: Option<u64>) -> StdRng {
    match graine {
        Some(g) => StdRng::seed_from_u64(g),
        None => StdRng::from_entropy(),
    }
}

/// Mode génération : lot de `nombre` problèmes puis Exercises.txt / Answers.txt.
pub fn lancer_generation(nombre: usize, borne: u64, reglages: &Reglages) -> Result<()> {
    let mut rng = rng_depuis(reglages.graine);

    let lot = generer_lot(&mut rng, nombre, borne)
        .with_context(|| format!("génération de {nombre} problèmes (r = {borne})"))?;
    let f = fichiers::ecrire_lot(&lot, &reglages.sortie)?;

    println!(
        "{} problèmes écrits : {} / {}",
        lot.len(),
        f.exercices.display(),
        f.reponses.display()
    );
    Ok(())
}

/// Mode correction : Grade.txt à partir des deux fichiers.
pub fn lancer_correction(
    exercices: &Path,
    reponses: &Path,
    reglages: &Reglages,
) -> Result<()> {
    let (bilan, chemin) = fichiers::corriger_fichiers(exercices, reponses, &reglages.sortie)?;

    print!("{bilan}");
    println!("Bilan écrit : {}", chemin.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn graine_reproductible() {
        use rand::Rng;
        let a: u64 = rng_depuis(Some(5)).gen();
        let b: u64 = rng_depuis(Some(5)).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn generation_puis_correction_de_bout_en_bout() {
        let dir = TempDir::new().unwrap();
        let reglages = Reglages {
            sortie: dir.path().to_path_buf(),
            graine: Some(11),
        };

        lancer_generation(20, 10, &reglages).unwrap();
        let ex = dir.path().join(fichiers::FICHIER_EXERCICES);
        let rep = dir.path().join(fichiers::FICHIER_REPONSES);
        lancer_correction(&ex, &rep, &reglages).unwrap();

        let bilan = std::fs::read_to_string(dir.path().join(fichiers::FICHIER_BILAN)).unwrap();
        assert!(bilan.starts_with("Correct: 20 ("), "{bilan}");
        assert!(bilan.contains("Wrong: 0 ()"), "{bilan}");
    }

    #[test]
    fn correction_fichier_absent_en_erreur() {
        let dir = TempDir::new().unwrap();
        let reglages = Reglages {
            sortie: dir.path().to_path_buf(),
            graine: None,
        };
        let absent = PathBuf::from("/chemin/qui/n/existe/pas.txt");

        let err = lancer_correction(&absent, &absent, &reglages).unwrap_err();
        assert!(err.to_string().contains("introuvable"), "{err:#}");
        assert!(!dir.path().join(fichiers::FICHIER_BILAN).exists());
    }
}
