// src/noyau/expr.rs
//
// Arbre d’expression exact (sans flottants).
// - Terminal : une Valeur (entier ou fraction brute)
// - Binaire  : op + deux enfants (possédés, immuables une fois construits)
//
// Rendu calculable : "(g op d)" avec `*` et `/`, espaces autour des opérateurs.

use std::fmt;

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurNoyau;
use super::valeur::Valeur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Op {
    pub const TOUS: [Op; 4] = [Op::Plus, Op::Moins, Op::Fois, Op::Div];

    /// Symbole calculable (celui que lit le tokenizer).
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '*',
            Op::Div => '/',
        }
    }

    /// Applique l’opérateur en arithmétique exacte.
    pub fn appliquer(self, a: BigRational, b: BigRational) -> Result<BigRational, ErreurNoyau> {
        Ok(match self {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Div => {
                if b.is_zero() {
                    return Err(ErreurNoyau::DivisionParZero);
                }
                a / b
            }
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Terminal(Valeur),
    Binaire {
        op: Op,
        gauche: Box<Expr>,
        droite: Box<Expr>,
    },
}

impl Expr {
    pub fn binaire(op: Op, gauche: Expr, droite: Expr) -> Expr {
        Expr::Binaire {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Nœud “entier” : construit uniquement à partir de terminaux Entier.
    /// (Une Fraction k/1 ne compte pas.)
    pub fn est_entiere(&self) -> bool {
        match self {
            Expr::Terminal(v) => v.est_entier(),
            Expr::Binaire { gauche, droite, .. } => gauche.est_entiere() && droite.est_entiere(),
        }
    }

    /// Valeur exacte de l’arbre.
    pub fn valeur(&self) -> Result<BigRational, ErreurNoyau> {
        match self {
            Expr::Terminal(v) => Ok(v.en_rationnel()),
            Expr::Binaire { op, gauche, droite } => op.appliquer(gauche.valeur()?, droite.valeur()?),
        }
    }

    /// Nombre d’opérateurs dans l’arbre.
    pub fn nb_operateurs(&self) -> usize {
        match self {
            Expr::Terminal(_) => 0,
            Expr::Binaire { gauche, droite, .. } => 1 + gauche.nb_operateurs() + droite.nb_operateurs(),
        }
    }

    /// Profondeur en opérateurs (un terminal vaut 0).
    pub fn profondeur(&self) -> usize {
        match self {
            Expr::Terminal(_) => 0,
            Expr::Binaire { gauche, droite, .. } => 1 + gauche.profondeur().max(droite.profondeur()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Terminal(v) => write!(f, "{v}"),
            Expr::Binaire { op, gauche, droite } => {
                write!(f, "({gauche} {} {droite})", op.symbole())
            }
        }
    }
}
