// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - DivisionParZero / Syntaxe : récupérées localement (candidat écarté, ou réponse “fausse”)
// - BorneInvalide / GenerationImpossible / LotIncomplet : remontées à l’appelant

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurNoyau {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("syntaxe invalide : {0}")]
    Syntaxe(String),

    #[error("borne invalide : r = {0} (il faut r ≥ 2)")]
    BorneInvalide(u64),

    #[error("génération impossible après {essais} essais (borne trop petite ?)")]
    GenerationImpossible { essais: usize },

    #[error("lot incomplet : {obtenus} problèmes uniques sur {demandes} demandés")]
    LotIncomplet { obtenus: usize, demandes: usize },
}

impl ErreurNoyau {
    /// Erreurs “normales” d’évaluation : le candidat est écarté, rien de fatal.
    pub fn est_evaluation(&self) -> bool {
        matches!(self, ErreurNoyau::DivisionParZero | ErreurNoyau::Syntaxe(_))
    }
}

impl From<&str> for ErreurNoyau {
    fn from(msg: &str) -> Self {
        ErreurNoyau::Syntaxe(msg.to_string())
    }
}

impl From<String> for ErreurNoyau {
    fn from(msg: String) -> Self {
        ErreurNoyau::Syntaxe(msg)
    }
}
