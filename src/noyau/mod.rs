//! Noyau exact Q-pur — exercices d’arithmétique
//!
//! Organisation interne :
//! - valeur.rs     : opérande (entier / fraction brute) + tirage
//! - expr.rs       : arbre d’expression + rendu calculable
//! - generateur.rs : arbre aléatoire borné + contraintes de domaine
//! - canon.rs      : forme canonique textuelle (parenthèses redondantes)
//! - jetons.rs     : tokenisation (entiers, a/b, w'a/b, + - * / × ÷)
//! - rpn.rs        : shunting-yard + évaluation exacte de la RPN
//! - format.rs     : réponse normalisée + glyphes d’affichage
//! - eval.rs       : pipeline complet texte -> réponse
//! - lot.rs        : lot de problèmes uniques
//! - correction.rs : correction d’un fichier de réponses
//! - erreur.rs     : erreurs du noyau

pub mod canon;
pub mod correction;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod generateur;
pub mod jetons;
pub mod lot;
pub mod rpn;
pub mod valeur;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use correction::{corriger, Bilan};
pub use erreur::ErreurNoyau;
pub use eval::{calculer, Reponse};
pub use lot::{generer_lot, LotProblemes};
