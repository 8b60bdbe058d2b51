// src/noyau/lot.rs
//
// Génération d’un lot de problèmes uniques :
// générer -> rendre -> canon -> (doublon ? on saute) -> évaluer -> garder
//
// Appariement : l’IndexSet garde l’ordre d’insertion, donc problème i <-> réponse i.

use indexmap::IndexSet;
use rand::Rng;
use tracing::{debug, info, trace, warn};

use super::canon::canoniser;
use super::erreur::ErreurNoyau;
use super::eval::{calculer, Reponse};
use super::generateur::generer;

/// Garde-fou : tentatives stériles consécutives (doublon ou évaluation ratée).
pub const MAX_ESSAIS_STERILES: usize = 100_000;

#[derive(Clone, Debug, Default)]
pub struct LotProblemes {
    problemes: IndexSet<String>,
    reponses: Vec<Reponse>,
}

impl LotProblemes {
    pub fn len(&self) -> usize {
        self.problemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problemes.is_empty()
    }

    pub fn contient(&self, probleme: &str) -> bool {
        self.problemes.contains(probleme)
    }

    /// Problèmes (forme canonique calculable), dans l’ordre d’insertion.
    pub fn problemes(&self) -> impl Iterator<Item = &str> {
        self.problemes.iter().map(String::as_str)
    }

    pub fn reponses(&self) -> &[Reponse] {
        &self.reponses
    }

    /// (problème, réponse), même position.
    pub fn paires(&self) -> impl Iterator<Item = (&str, &Reponse)> {
        self.problemes().zip(self.reponses.iter())
    }

    /// Ajoute un problème nouveau ; false (et rien ne change) si déjà présent.
    fn inserer(&mut self, probleme: String, reponse: Reponse) -> bool {
        if !self.problemes.insert(probleme) {
            return false;
        }
        self.reponses.push(reponse);
        true
    }
}

/// Génère `n` problèmes uniques avec la borne `r`.
pub fn generer_lot<R: Rng>(rng: &mut R, n: usize, r: u64) -> Result<LotProblemes, ErreurNoyau> {
    generer_lot_plafonne(rng, n, r, MAX_ESSAIS_STERILES)
}

/// Comme `generer_lot`, abandon après `plafond` tentatives stériles consécutives.
pub(crate) fn generer_lot_plafonne<R: Rng>(
    rng: &mut R,
    n: usize,
    r: u64,
    plafond: usize,
) -> Result<LotProblemes, ErreurNoyau> {
    let mut lot = LotProblemes::default();
    let mut steriles = 0usize;

    while lot.len() < n {
        if steriles >= plafond {
            warn!(obtenus = lot.len(), demandes = n, "lot incomplet, abandon");
            return Err(ErreurNoyau::LotIncomplet {
                obtenus: lot.len(),
                demandes: n,
            });
        }

        let expr = generer(rng, r)?;
        let canon = canoniser(&expr.to_string());

        if lot.contient(&canon) {
            steriles += 1;
            continue;
        }

        match calculer(&canon) {
            Ok(reponse) => {
                trace!(probleme = %canon, ops = expr.nb_operateurs(), "problème retenu");
                lot.inserer(canon, reponse);
                steriles = 0;
            }
            Err(e) if e.est_evaluation() => {
                debug!(probleme = %canon, erreur = %e, "candidat écarté");
                steriles += 1;
            }
            Err(e) => return Err(e),
        }
    }

    info!(n, r, "lot généré");
    Ok(lot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lot_vide() {
        let mut rng = StdRng::seed_from_u64(0);
        let lot = generer_lot(&mut rng, 0, 10).unwrap();
        assert!(lot.is_empty());
        assert!(lot.reponses().is_empty());
    }

    #[test]
    fn taille_exacte_et_unicite() {
        let mut rng = StdRng::seed_from_u64(2024);
        let lot = generer_lot(&mut rng, 200, 10).unwrap();

        assert_eq!(lot.len(), 200);
        assert_eq!(lot.reponses().len(), 200);

        let distincts: std::collections::HashSet<&str> = lot.problemes().collect();
        assert_eq!(distincts.len(), 200);
    }

    #[test]
    fn appariement_positionnel() {
        let mut rng = StdRng::seed_from_u64(5);
        let lot = generer_lot(&mut rng, 50, 8).unwrap();

        for (probleme, reponse) in lot.paires() {
            assert_eq!(&calculer(probleme).unwrap(), reponse, "probleme={probleme:?}");
        }
    }

    #[test]
    fn borne_invalide_remontee() {
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            generer_lot(&mut rng, 3, 1).unwrap_err(),
            ErreurNoyau::BorneInvalide(1)
        );
    }

    #[test]
    fn plafond_nul_lot_incomplet_des_le_depart() {
        let mut rng = StdRng::seed_from_u64(8);
        let lot = generer_lot_plafonne(&mut rng, 0, 10, 0).unwrap();
        assert!(lot.is_empty());

        assert_eq!(
            generer_lot_plafonne(&mut rng, 10, 10, 0).unwrap_err(),
            ErreurNoyau::LotIncomplet {
                obtenus: 0,
                demandes: 10
            }
        );
    }

    #[test]
    fn borne_minimale_epuise_le_plafond() {
        // r = 2 : peu de problèmes distincts, les doublons arrivent vite
        let mut rng = StdRng::seed_from_u64(17);
        let err = generer_lot_plafonne(&mut rng, 100_000, 2, 1).unwrap_err();
        match err {
            ErreurNoyau::LotIncomplet { obtenus, demandes } => {
                assert_eq!(demandes, 100_000);
                assert!(obtenus < demandes, "obtenus={obtenus}");
            }
            autre => panic!("attendu LotIncomplet, obtenu {autre:?}"),
        }
    }

    #[test]
    fn insertion_doublon_refusee() {
        let mut lot = LotProblemes::default();
        let un = calculer("1").unwrap();
        assert!(lot.inserer("1".into(), un.clone()));
        assert!(!lot.inserer("1".into(), un));
        assert_eq!(lot.len(), 1);
        assert_eq!(lot.reponses().len(), 1);
    }
}
