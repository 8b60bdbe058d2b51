//! src/app/fichiers.rs
//!
//! Fichiers texte (UTF-8, une ligne par problème).
//!
//! - Exercises.txt : forme affichée (× ÷) + " ="
//! - Answers.txt   : réponse normalisée, même ordre
//! - Grade.txt     : "Correct: n (…)" puis "Wrong: n (…)"
//!
//! Aucune logique de calcul ici : tout passe par le noyau.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::noyau::correction::{corriger, Bilan};
use crate::noyau::format::vers_affichage;
use crate::noyau::lot::LotProblemes;

pub const FICHIER_EXERCICES: &str = "Exercises.txt";
pub const FICHIER_REPONSES: &str = "Answers.txt";
pub const FICHIER_BILAN: &str = "Grade.txt";

#[derive(Error, Debug)]
pub enum ErreurFichier {
    #[error("fichier introuvable : {0} (vérifiez le chemin)")]
    Introuvable(PathBuf),

    #[error("lecture impossible de {chemin} : {source}")]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },

    #[error("écriture impossible de {chemin} : {source}")]
    Ecriture {
        chemin: PathBuf,
        source: std::io::Error,
    },
}

/// Chemins écrits par `ecrire_lot`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FichiersLot {
    pub exercices: PathBuf,
    pub reponses: PathBuf,
}

fn ecrire_lignes<I, S>(chemin: &Path, lignes: I) -> Result<(), ErreurFichier>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut texte = String::new();
    for l in lignes {
        texte.push_str(l.as_ref());
        texte.push('\n');
    }
    fs::write(chemin, texte).map_err(|source| ErreurFichier::Ecriture {
        chemin: chemin.to_path_buf(),
        source,
    })
}

fn preparer_dossier(dossier: &Path) -> Result<(), ErreurFichier> {
    fs::create_dir_all(dossier).map_err(|source| ErreurFichier::Ecriture {
        chemin: dossier.to_path_buf(),
        source,
    })
}

/// Lit un fichier en lignes (sans les fins de ligne).
pub fn lire_lignes(chemin: &Path) -> Result<Vec<String>, ErreurFichier> {
    let texte = fs::read_to_string(chemin).map_err(|source| ErreurFichier::Lecture {
        chemin: chemin.to_path_buf(),
        source,
    })?;
    Ok(texte.lines().map(str::to_string).collect())
}

/// Écrit Exercises.txt et Answers.txt dans `dossier`.
pub fn ecrire_lot(lot: &LotProblemes, dossier: &Path) -> Result<FichiersLot, ErreurFichier> {
    preparer_dossier(dossier)?;

    let exercices = dossier.join(FICHIER_EXERCICES);
    let reponses = dossier.join(FICHIER_REPONSES);

    ecrire_lignes(
        &exercices,
        lot.problemes().map(|p| format!("{} =", vers_affichage(p))),
    )?;
    ecrire_lignes(&reponses, lot.reponses().iter().map(|r| r.to_string()))?;

    info!(
        n = lot.len(),
        exercices = %exercices.display(),
        reponses = %reponses.display(),
        "lot écrit"
    );

    Ok(FichiersLot { exercices, reponses })
}

/// Corrige deux fichiers et écrit Grade.txt dans `dossier`.
///
/// Si l’un des deux fichiers n’existe pas : erreur `Introuvable`,
/// aucune correction, aucun Grade.txt.
pub fn corriger_fichiers(
    exercices: &Path,
    reponses: &Path,
    dossier: &Path,
) -> Result<(Bilan, PathBuf), ErreurFichier> {
    for chemin in [exercices, reponses] {
        if !chemin.exists() {
            warn!(chemin = %chemin.display(), "fichier introuvable, correction annulée");
            return Err(ErreurFichier::Introuvable(chemin.to_path_buf()));
        }
    }

    let lignes_ex = lire_lignes(exercices)?;
    let lignes_rep = lire_lignes(reponses)?;
    let bilan = corriger(&lignes_ex, &lignes_rep);

    preparer_dossier(dossier)?;
    let chemin_bilan = dossier.join(FICHIER_BILAN);
    fs::write(&chemin_bilan, bilan.to_string()).map_err(|source| ErreurFichier::Ecriture {
        chemin: chemin_bilan.clone(),
        source,
    })?;

    info!(
        corrects = bilan.corrects.len(),
        faux = bilan.faux.len(),
        bilan = %chemin_bilan.display(),
        "correction écrite"
    );

    Ok((bilan, chemin_bilan))
}
