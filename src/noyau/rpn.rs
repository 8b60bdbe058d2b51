// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN en BigRational (jamais de flottants)
//
// Règles:
// - * / avant + -, associativité à gauche
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on injecte 0 : "-x" => "0 x -"

use num_rational::BigRational;
use num_traits::Zero;

use super::erreur::ErreurNoyau;
use super::expr::Op;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

fn operateur(t: &Tok) -> Option<Op> {
    match t {
        Tok::Plus => Some(Op::Plus),
        Tok::Minus => Some(Op::Moins),
        Tok::Star => Some(Op::Fois),
        Tok::Slash => Some(Op::Div),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(3), Star, Num(2), RPar, Slash, Num(4)]
///   rpn:    [Num(3), Num(2), Star, Num(4), Slash]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err("parenthèse fermante sans ouvrante".into());
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // moins unaire : si pas de valeur avant, injecte 0
                if matches!(tok, Tok::Minus) && !prev_was_value {
                    out.push(Tok::Num(BigRational::zero()));
                }

                // associativité à gauche : on sort tant que p_top >= p_tok
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN en arithmétique rationnelle exacte.
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurNoyau> {
    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(r) => st.push(r.clone()),

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),

            _ => {
                let op = operateur(tok).ok_or("opérateur inconnu")?;
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;
                st.push(op.appliquer(a, b)?);
            }
        }
    }

    let resultat = st.pop().ok_or("expression vide")?;
    if !st.is_empty() {
        return Err("expression invalide".into());
    }
    Ok(resultat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, tokenize};
    use num_bigint::BigInt;

    fn rpn_txt(s: &str) -> String {
        format_tokens(&to_rpn(&tokenize(s).unwrap()).unwrap())
    }

    fn val(s: &str) -> Result<BigRational, ErreurNoyau> {
        evaluer_rpn(&to_rpn(&tokenize(s)?)?)
    }

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn priorites_et_parentheses() {
        assert_eq!(rpn_txt("1 + 2 * 3"), "1 2 3 * +");
        assert_eq!(rpn_txt("(1 + 2) * 3"), "1 2 + 3 *");
        assert_eq!(rpn_txt("8 / 4 / 2"), "8 4 / 2 /");
        assert_eq!(rpn_txt("5 - 3 - 1"), "5 3 - 1 -");
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(rpn_txt("-1/2"), "0 1/2 -");
        assert_eq!(val("-(1 + 2)").unwrap(), rat(-3, 1));
    }

    #[test]
    fn evaluation_exacte() {
        assert_eq!(val("(3 * 2) / 4").unwrap(), rat(3, 2));
        assert_eq!(val("1/3 + 1/6").unwrap(), rat(1, 2));
        assert_eq!(val("1'1/2 * 2").unwrap(), rat(3, 1));
    }

    #[test]
    fn division_par_zero() {
        assert_eq!(val("1 / (2 - 2)"), Err(ErreurNoyau::DivisionParZero));
    }

    #[test]
    fn syntaxe_invalide() {
        assert!(matches!(val("(1 + 2"), Err(ErreurNoyau::Syntaxe(_))));
        assert!(matches!(val("1 + 2)"), Err(ErreurNoyau::Syntaxe(_))));
        assert!(matches!(val("1 +"), Err(ErreurNoyau::Syntaxe(_))));
        assert!(matches!(val("1 2"), Err(ErreurNoyau::Syntaxe(_))));
        assert!(matches!(val(""), Err(ErreurNoyau::Syntaxe(_))));
    }
}
