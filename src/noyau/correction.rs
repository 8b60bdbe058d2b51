// src/noyau/correction.rs
//
// Correction : chaque exercice est recalculé puis comparé à la réponse soumise.
// Comparaison TEXTUELLE exacte : "3/2" n’est pas accepté pour "1'1/2".

use std::fmt;

use tracing::debug;

use super::eval::calculer;
use super::format::vers_calculable;

/// Bilan de correction : numéros de ligne (à partir de 1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bilan {
    pub corrects: Vec<usize>,
    pub faux: Vec<usize>,
}

impl fmt::Display for Bilan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn liste(v: &[usize]) -> String {
            v.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
        }
        writeln!(f, "Correct: {} ({})", self.corrects.len(), liste(&self.corrects))?;
        writeln!(f, "Wrong: {} ({})", self.faux.len(), liste(&self.faux))
    }
}

/// Ligne d’exercice -> expression calculable ("(3 × 2) ÷ 4 =" -> "(3 * 2) / 4").
pub fn nettoyer_exercice(ligne: &str) -> String {
    let sans_egal = ligne.trim().trim_end_matches('=');
    vers_calculable(sans_egal.trim())
}

/// Vrai si la réponse soumise est exactement la réponse recalculée.
/// Un exercice non évaluable (division par zéro, syntaxe) est toujours faux.
pub fn est_correct(exercice: &str, reponse: &str) -> bool {
    match calculer(&nettoyer_exercice(exercice)) {
        Ok(attendu) => attendu.to_string() == reponse.trim(),
        Err(e) => {
            debug!(exercice, erreur = %e, "exercice non évaluable");
            false
        }
    }
}

/// Corrige ligne à ligne ; la plus courte des deux listes borne l’appariement.
pub fn corriger<E, R>(exercices: &[E], reponses: &[R]) -> Bilan
where
    E: AsRef<str>,
    R: AsRef<str>,
{
    let mut bilan = Bilan::default();

    for (i, (exercice, reponse)) in exercices.iter().zip(reponses).enumerate() {
        let numero = i + 1;
        if est_correct(exercice.as_ref(), reponse.as_ref()) {
            bilan.corrects.push(numero);
        } else {
            bilan.faux.push(numero);
        }
    }

    bilan
}
