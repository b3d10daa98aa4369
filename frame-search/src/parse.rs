use anyhow::{bail, Context};
use rmframe::{Element, Triple};

/// Reads triples written either as three digits (`011`) or as three
/// comma-separated labels (`0,1,1`, optionally parenthesized), separated by
/// whitespace or semicolons.
pub fn parse_relation(text: &str) -> anyhow::Result<Vec<Triple>> {
    text.split(|c: char| c.is_whitespace() || c == ';')
        .filter(|token| !token.is_empty())
        .map(parse_triple)
        .collect()
}

fn parse_triple(token: &str) -> anyhow::Result<Triple> {
    let inner = token.trim_start_matches('(').trim_end_matches(')');
    let labels: Vec<Element> = if inner.contains(',') {
        inner
            .split(',')
            .map(|it| {
                it.parse::<Element>()
                    .with_context(|| format!("bad label {:?} in {:?}", it, token))
            })
            .collect::<anyhow::Result<_>>()?
    } else {
        inner
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as Element)
                    .with_context(|| format!("bad label {:?} in {:?}", c, token))
            })
            .collect::<anyhow::Result<_>>()?
    };
    match labels[..] {
        [a, b, c] => Ok((a, b, c)),
        _ => bail!(
            "{:?} is not a triple; write it as `abc` or `a,b,c`",
            token
        ),
    }
}
