// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurNoyau;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - entiers (ex: 12)
/// - fractions littérales sans espaces (ex: 12/34) -> Num(12/34)
/// - nombres mixtes (ex: 2'3/4) -> Num(11/4)
/// - opérateurs + - * / et leurs glyphes × ÷
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurNoyau> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let op = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' | '×' => Some(Tok::Star),
            '/' | '÷' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = op {
            out.push(t);
            i += 1;
            continue;
        }

        // Littéral : entier, a/b ou w'a/b (sans espaces)
        if c.is_ascii_digit() {
            let (n, suite) = lire_entier(&chars, i)?;
            i = suite;

            let rat = if i < chars.len() && chars[i] == '\'' {
                // nombre mixte : 2'3/4
                let (frac, suite) = lire_fraction(&chars, i + 1)?
                    .ok_or("nombre mixte incomplet (attendu w'a/b)")?;
                i = suite;
                BigRational::from_integer(n) + frac
            } else if let Some((frac, suite)) = lire_fraction_apres(&chars, i, &n)? {
                // fraction immédiate: 12/34
                i = suite;
                frac
            } else {
                // par défaut: entier
                BigRational::from_integer(n)
            };

            out.push(Tok::Num(rat));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'").into());
    }

    Ok(out)
}

/// Lit une suite de chiffres à partir de `i`. Renvoie (valeur, index suivant).
fn lire_entier(chars: &[char], i: usize) -> Result<(BigInt, usize), ErreurNoyau> {
    let mut j = i;
    while j < chars.len() && chars[j].is_ascii_digit() {
        j += 1;
    }
    if j == i {
        return Err("chiffre attendu".into());
    }
    let txt: String = chars[i..j].iter().collect();
    let n = BigInt::parse_bytes(txt.as_bytes(), 10).ok_or("nombre invalide")?;
    Ok((n, j))
}

/// Lit "a/b" à partir de `i` (partie fractionnaire d’un nombre mixte).
fn lire_fraction(chars: &[char], i: usize) -> Result<Option<(BigRational, usize)>, ErreurNoyau> {
    if i >= chars.len() || !chars[i].is_ascii_digit() {
        return Ok(None);
    }
    let (num, suite) = lire_entier(chars, i)?;
    lire_fraction_apres(chars, suite, &num)
}

/// Si `chars[i]` est '/' immédiatement suivi d’un chiffre : fraction num/den.
/// Sinon (ex: "6 / 3") : None, c’est une division normale.
fn lire_fraction_apres(
    chars: &[char],
    i: usize,
    num: &BigInt,
) -> Result<Option<(BigRational, usize)>, ErreurNoyau> {
    if i >= chars.len() || chars[i] != '/' {
        return Ok(None);
    }
    if i + 1 >= chars.len() || !chars[i + 1].is_ascii_digit() {
        return Ok(None);
    }

    let (den, suite) = lire_entier(chars, i + 1)?;
    if den.is_zero() {
        return Err(ErreurNoyau::DivisionParZero);
    }
    Ok(Some((BigRational::new(num.clone(), den), suite)))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn fraction_collee_vs_division() {
        assert_eq!(tokenize("3/4").unwrap(), vec![Tok::Num(rat(3, 4))]);
        assert_eq!(
            tokenize("6 / 3").unwrap(),
            vec![Tok::Num(rat(6, 1)), Tok::Slash, Tok::Num(rat(3, 1))]
        );
    }

    #[test]
    fn nombre_mixte() {
        assert_eq!(tokenize("2'3/4").unwrap(), vec![Tok::Num(rat(11, 4))]);
        assert!(tokenize("2'3").is_err());
        assert!(tokenize("2'").is_err());
    }

    #[test]
    fn glyphes_affichage() {
        assert_eq!(
            format_tokens(&tokenize("(3 × 2) ÷ 4").unwrap()),
            "( 3 * 2 ) / 4"
        );
    }

    #[test]
    fn denominateur_nul() {
        assert_eq!(tokenize("1/0"), Err(ErreurNoyau::DivisionParZero));
        assert_eq!(tokenize("1'1/0"), Err(ErreurNoyau::DivisionParZero));
    }

    #[test]
    fn caractere_inattendu() {
        assert!(matches!(tokenize("2 ^ 3"), Err(ErreurNoyau::Syntaxe(_))));
    }
}
