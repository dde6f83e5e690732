// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur (f64)
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de flottants
//
// Règles:
// - Précédences : + - (1) < * / (2) < unaires + - (3) < ** (4, associatif à droite)
// - '+'/'-' sont unaires quand on attend une valeur (début, après '(' ou un opérateur)
// - Un unaire juste avant la base de ** est refusé : "-2**2" doit s’écrire "-(2**2)" ou "(-2)**2"
// - Deux valeurs juxtaposées ("2 3", "2 pi", "(1)(2)") sont refusées : pas de multiplication implicite

use std::f64::consts::PI;

use super::erreur::ErreurExpression;
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Puissance,
    Neg,
    Pos,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rpn {
    Val(f64),
    Op(Op),
}

/// Élément de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Op),
    LPar,
}

fn precedence(op: Op) -> i32 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
        Op::Neg | Op::Pos => 3,
        Op::Puissance => 4,
    }
}

fn is_right_associative(op: Op) -> bool {
    matches!(op, Op::Puissance)
}

fn est_unaire(op: Op) -> bool {
    matches!(op, Op::Neg | Op::Pos)
}

/// Dépile vers `out` tant que la précédence/associativité l’exige.
fn depile_pour(op: Op, ops: &mut Vec<Pile>, out: &mut Vec<Rpn>) {
    while let Some(Pile::Op(top)) = ops.last().copied() {
        let doit_pop = if is_right_associative(op) {
            precedence(top) > precedence(op)
        } else {
            precedence(top) >= precedence(op)
        };
        if !doit_pop {
            break;
        }
        ops.pop();
        out.push(Rpn::Op(top));
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Star, Pi, Slash, Num(4)]
///   rpn:    [3, π, *, 4, /]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, ErreurExpression> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // true tant qu’on attend un opérande (début, après '(' ou un opérateur).
    let mut attend_valeur = true;

    for tok in tokens {
        match tok {
            Tok::Num(_) | Tok::Pi => {
                if !attend_valeur {
                    return Err(ErreurExpression::syntaxe("valeurs juxtaposées"));
                }
                let v = match tok {
                    Tok::Num(v) => *v,
                    _ => PI,
                };
                out.push(Rpn::Val(v));
                attend_valeur = false;
            }

            Tok::LPar => {
                if !attend_valeur {
                    return Err(ErreurExpression::syntaxe("'(' après une valeur"));
                }
                ops.push(Pile::LPar);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err(ErreurExpression::syntaxe("')' sans opérande"));
                }
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(Pile::Op(op)) => out.push(Rpn::Op(op)),
                        None => return Err(ErreurExpression::syntaxe("')' en trop")),
                    }
                }
                attend_valeur = false;
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                // unaire : préfixe, ne dépile rien
                let op = if matches!(tok, Tok::Minus) {
                    Op::Neg
                } else {
                    Op::Pos
                };
                ops.push(Pile::Op(op));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Puissance => {
                if attend_valeur {
                    return Err(ErreurExpression::syntaxe("opérateur sans opérande gauche"));
                }
                let op = match tok {
                    Tok::Plus => Op::Plus,
                    Tok::Minus => Op::Minus,
                    Tok::Star => Op::Star,
                    Tok::Slash => Op::Slash,
                    _ => Op::Puissance,
                };

                if op == Op::Puissance {
                    if let Some(Pile::Op(top)) = ops.last() {
                        if est_unaire(*top) {
                            return Err(ErreurExpression::syntaxe(
                                "unaire devant '**' : parenthèses requises",
                            ));
                        }
                    }
                }

                depile_pour(op, &mut ops, &mut out);
                ops.push(Pile::Op(op));
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(ErreurExpression::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::LPar => return Err(ErreurExpression::syntaxe("parenthèses non fermées")),
            Pile::Op(op) => out.push(Rpn::Op(op)),
        }
    }

    Ok(out)
}

/// Évalue une RPN.
/// - Division par zéro => erreur (même 0/0)
/// - Résultat non fini (overflow, NaN de `**`) => erreur
pub fn eval_rpn(rpn: &[Rpn]) -> Result<f64, ErreurExpression> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for r in rpn {
        match *r {
            Rpn::Val(v) => st.push(v),

            Rpn::Op(op) if est_unaire(op) => {
                let x = st.pop().ok_or_else(|| ErreurExpression::syntaxe("unaire sans argument"))?;
                st.push(if op == Op::Neg { -x } else { x });
            }

            Rpn::Op(op) => {
                let b = st.pop().ok_or_else(|| ErreurExpression::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurExpression::syntaxe("expression invalide"))?;

                let v = match op {
                    Op::Plus => a + b,
                    Op::Minus => a - b,
                    Op::Star => a * b,
                    Op::Slash => {
                        if b == 0.0 {
                            return Err(ErreurExpression::DivisionParZero);
                        }
                        a / b
                    }
                    Op::Puissance => a.powf(b),
                    Op::Neg | Op::Pos => unreachable!(),
                };
                st.push(v);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurExpression::syntaxe("expression invalide"));
    }
    let v = st[0];
    if !v.is_finite() {
        return Err(ErreurExpression::NonFini);
    }
    Ok(v)
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[Rpn]) -> String {
    rpn.iter()
        .map(|r| match r {
            Rpn::Val(v) => format!("{v}"),
            Rpn::Op(Op::Plus) => "+".to_string(),
            Rpn::Op(Op::Minus) => "-".to_string(),
            Rpn::Op(Op::Star) => "*".to_string(),
            Rpn::Op(Op::Slash) => "/".to_string(),
            Rpn::Op(Op::Puissance) => "**".to_string(),
            Rpn::Op(Op::Neg) => "neg".to_string(),
            Rpn::Op(Op::Pos) => "pos".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::tokenize;

    fn eval(s: &str) -> Result<f64, ErreurExpression> {
        let t = tokenize(s)?;
        eval_rpn(&to_rpn(&t)?)
    }

    fn assert_proche(s: &str, attendu: f64) {
        let v = eval(s).unwrap_or_else(|e| panic!("expr={s:?} err={e}"));
        assert!((v - attendu).abs() < 1e-12, "expr={s:?} v={v} attendu={attendu}");
    }

    #[test]
    fn precedence_classique() {
        assert_proche("1 + 2 * 3", 7.0);
        assert_proche("(1 + 2) * 3", 9.0);
        assert_proche("8 / 4 / 2", 1.0);
        assert_proche("10 - 4 - 3", 3.0);
    }

    #[test]
    fn unaires() {
        assert_proche("-2 * 3", -6.0);
        assert_proche("2 * -3", -6.0);
        assert_proche("- -1", 1.0);
        assert_proche("+-1", -1.0);
        assert_proche("1 - -1", 2.0);
        assert_proche("-(1 + 2)", -3.0);
    }

    #[test]
    fn puissance_associative_a_droite() {
        assert_proche("2 ** 3 ** 2", 512.0);
        assert_proche("2 ** -1", 0.5);
        assert_proche("(-2) ** 2", 4.0);
        assert_proche("-(2 ** 2)", -4.0);
        assert!(eval("-2 ** 2").is_err());
        assert!(eval("2 * -3 ** 2").is_err());
    }

    #[test]
    fn rpn_de_fraction_de_pi() {
        let rpn = to_rpn(&tokenize("3*pi/4").unwrap()).unwrap();
        assert_eq!(
            rpn,
            vec![
                Rpn::Val(3.0),
                Rpn::Val(PI),
                Rpn::Op(Op::Star),
                Rpn::Val(4.0),
                Rpn::Op(Op::Slash),
            ]
        );
    }

    #[test]
    fn erreurs_de_syntaxe() {
        for s in ["pi *", "()", "(1", "1)", "2 3", "(1)(2)", "2 (3)", "* 2", "1 +"] {
            assert!(
                matches!(eval(s), Err(ErreurExpression::Syntaxe(_))),
                "expr={s:?} devrait être une erreur de syntaxe"
            );
        }
    }

    #[test]
    fn division_par_zero_et_non_fini() {
        assert_eq!(eval("1/0"), Err(ErreurExpression::DivisionParZero));
        assert_eq!(eval("0/0"), Err(ErreurExpression::DivisionParZero));
        assert_eq!(eval("1/(1-1)"), Err(ErreurExpression::DivisionParZero));
        assert_eq!(eval("10 ** 400"), Err(ErreurExpression::NonFini));
        assert_eq!(eval("(-8) ** (1/3)"), Err(ErreurExpression::NonFini));
    }

    #[test]
    fn format_rpn_lisible() {
        let rpn = to_rpn(&tokenize("-1 + 2").unwrap()).unwrap();
        assert_eq!(format_rpn(&rpn), "1 neg 2 +");
    }
}
