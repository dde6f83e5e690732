// src/noyau/jetons.rs
//
// Tokenisation + porte de caractères.
// Seuls passent : chiffres, point décimal, espaces, + - * / ( ) et le mot entier "pi".
// Tout autre caractère (lettre, ';', 'π', ...) rejette l’expression AVANT évaluation.

use super::erreur::ErreurExpression;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,

    Plus,
    Minus,
    Star,
    Slash,
    Puissance, // **

    LPar,
    RPar,
}

/// Caractère "de mot" (frontière \b) : lettre ASCII, chiffre, '_'.
fn est_car_mot(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize une chaîne DÉJÀ normalisée (trim + minuscules).
/// Supporte:
/// - nombres décimaux (12, 1.5, .5, 5.)
/// - opérateurs + - * / et ** (puissance)
/// - parenthèses ( )
/// - pi, uniquement comme mot entier ("pipi", "2pi", "pi2" sont refusés)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurExpression> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let suivant = chars.get(i + 1).copied();

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            // "++" / "--" collés : incrément/décrément, jamais valides sur une valeur
            '+' | '-' if suivant == Some(c) => {
                return Err(ErreurExpression::syntaxe(format!("opérateur '{c}{c}'")));
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' if suivant == Some('*') => {
                out.push(Tok::Puissance);
                i += 2;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            // "//" et "/*" ouvriraient un commentaire : refusés
            '/' if matches!(suivant, Some('/') | Some('*')) => {
                return Err(ErreurExpression::syntaxe("commentaire interdit"));
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Mots : [a-z_][a-z0-9_]*  => "pi" ou rejet
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            while i < chars.len() && est_car_mot(chars[i]) {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            if mot == "pi" {
                out.push(Tok::Pi);
                continue;
            }
            return Err(ErreurExpression::MotInterdit(mot));
        }

        // Nombre : [0-9]* ( '.' [0-9]* )?  avec au moins un chiffre
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();

            // collé à un mot ("2pi", "1e5") : pas de frontière => mot interdit
            if i < chars.len() && (chars[i].is_ascii_alphabetic() || chars[i] == '_') {
                let mut fin = i;
                while fin < chars.len() && est_car_mot(chars[fin]) {
                    fin += 1;
                }
                let mot: String = chars[start..fin].iter().collect();
                return Err(ErreurExpression::MotInterdit(mot));
            }

            if !txt.chars().any(|d| d.is_ascii_digit()) {
                return Err(ErreurExpression::syntaxe("point décimal isolé"));
            }

            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurExpression::syntaxe(format!("nombre invalide: {txt}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurExpression::CaractereInterdit(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Pi => "pi".to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Puissance => "**".to_string(),

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

    #[test]
    fn jetons_fraction_de_pi() {
        let t = tokenize("3*pi/4").unwrap();
        assert_eq!(
            t,
            vec![Tok::Num(3.0), Tok::Star, Tok::Pi, Tok::Slash, Tok::Num(4.0)]
        );
    }

    #[test]
    fn nombres_decimaux() {
        assert_eq!(tokenize(".5").unwrap(), vec![Tok::Num(0.5)]);
        assert_eq!(tokenize("5.").unwrap(), vec![Tok::Num(5.0)]);
        assert_eq!(tokenize("1.25").unwrap(), vec![Tok::Num(1.25)]);
        assert!(tokenize(".").is_err());
    }

    #[test]
    fn pi_seulement_comme_mot_entier() {
        assert_eq!(tokenize("pi").unwrap(), vec![Tok::Pi]);
        assert_eq!(tokenize("(pi)").unwrap(), vec![Tok::LPar, Tok::Pi, Tok::RPar]);
        assert_eq!(
            tokenize("pipi"),
            Err(ErreurExpression::MotInterdit("pipi".into()))
        );
        assert_eq!(tokenize("2pi"), Err(ErreurExpression::MotInterdit("2pi".into())));
        assert_eq!(tokenize("pi2"), Err(ErreurExpression::MotInterdit("pi2".into())));
    }

    #[test]
    fn porte_de_caracteres() {
        assert_eq!(
            tokenize("alert(1)"),
            Err(ErreurExpression::MotInterdit("alert".into()))
        );
        assert_eq!(tokenize("1;2"), Err(ErreurExpression::CaractereInterdit(';')));
        assert_eq!(tokenize("π"), Err(ErreurExpression::CaractereInterdit('π')));
        assert!(tokenize("1e5").is_err());
        assert!(tokenize("infinity").is_err());
    }

    #[test]
    fn operateurs_composes() {
        assert_eq!(
            tokenize("2**3").unwrap(),
            vec![Tok::Num(2.0), Tok::Puissance, Tok::Num(3.0)]
        );
        assert!(tokenize("1--1").is_err());
        assert!(tokenize("1++1").is_err());
        assert!(tokenize("pi//2").is_err());
        assert!(tokenize("pi/*2*/").is_err());
        // séparés par un espace : deux opérateurs distincts
        assert_eq!(tokenize("1- -1").unwrap().len(), 4);
    }

    #[test]
    fn format_tokens_lisible() {
        let t = tokenize("(pi + 1.5) ** 2").unwrap();
        assert_eq!(format_tokens(&t), "( pi + 1.5 ) ** 2");
    }
}
