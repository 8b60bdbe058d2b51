// src/noyau/canon.rs
//
// Forme canonique (textuelle) d’une expression rendue :
// - "((X))" -> "(X)" quand la paire intérieure enferme exactement X
// - "(X)"   -> "X"   quand la paire enferme toute l’expression
// On répète jusqu’au point fixe (idempotent).
//
// Note : réécriture de texte, pas de re-parse. Les parenthèses redondantes
// intérieures (ex: "(1 * 2) + 3") restent telles quelles.

/// Canonicalise une expression rendue (ou un littéral nu).
pub fn canoniser(expr: &str) -> String {
    let mut s = expr.trim().to_string();
    while let Some(suivant) = retirer_une_paire(&s) {
        s = suivant;
    }
    s
}

/// Retire une paire redondante si possible.
fn retirer_une_paire(s: &str) -> Option<String> {
    let paires = apparier(s)?;
    let octets = s.as_bytes();
    let dernier = octets.len().checked_sub(1)?;

    // paire extérieure
    if octets.first() == Some(&b'(') && paires[0] == Some(dernier) {
        return Some(s[1..dernier].trim().to_string());
    }

    // paire doublée
    for (o, c) in paires.iter().enumerate().filter_map(|(o, c)| c.map(|c| (o, c))) {
        if c >= o + 2 && octets[o + 1] == b'(' && paires[o + 1] == Some(c - 1) {
            let mut out = String::with_capacity(s.len() - 2);
            out.push_str(&s[..o]);
            out.push_str(&s[o + 1..c]);
            out.push_str(&s[c + 1..]);
            return Some(out);
        }
    }

    None
}

/// Pour chaque '(' (index d’octet), l’index de sa ')' correspondante.
/// None si les parenthèses ne sont pas équilibrées (on ne touche à rien).
fn apparier(s: &str) -> Option<Vec<Option<usize>>> {
    let octets = s.as_bytes();
    let mut paires = vec![None; octets.len()];
    let mut pile: Vec<usize> = Vec::new();

    for (i, &b) in octets.iter().enumerate() {
        match b {
            b'(' => pile.push(i),
            b')' => {
                let o = pile.pop()?;
                paires[o] = Some(i);
            }
            _ => {}
        }
    }

    if pile.is_empty() {
        Some(paires)
    } else {
        None
    }
}
