//! Exercices Q-pur — générateur d’exercices d’arithmétique exacte
//! (naturels, fractions, nombres mixtes) et correcteur.
//!
//! - `noyau` : génération, forme canonique, évaluation exacte, correction
//! - `app`   : ligne de commande, fichiers, journal

pub mod app;
pub mod noyau;
