use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SelectorAttrCondition {
    Exists { key: String },
    Eq { key: String, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SelectorStep {
    pub(crate) tag: Option<String>,
    pub(crate) universal: bool,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<SelectorAttrCondition>,
}

impl SelectorStep {
    pub(crate) fn id_only(&self) -> Option<&str> {
        if !self.universal && self.tag.is_none() && self.classes.is_empty() && self.attrs.is_empty()
        {
            self.id.as_deref()
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        !self.universal
            && self.tag.is_none()
            && self.id.is_none()
            && self.classes.is_empty()
            && self.attrs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectorCombinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectorPart {
    pub(crate) step: SelectorStep,
    // Relation to previous (left) selector part.
    pub(crate) combinator: Option<SelectorCombinator>,
}

pub(crate) fn parse_selector_groups(selector: &str) -> Result<Vec<Vec<SelectorPart>>> {
    let groups = split_selector_groups(selector)?;
    let mut out = Vec::new();
    for group in groups {
        out.push(parse_selector_chain(&group)?);
    }
    if out.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    Ok(out)
}

fn parse_selector_chain(selector: &str) -> Result<Vec<SelectorPart>> {
    let selector = selector.trim();
    if selector.is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    let tokens = tokenize_selector(selector)?;
    let mut steps = Vec::new();
    let mut pending_combinator: Option<SelectorCombinator> = None;

    for token in tokens {
        if token == ">" {
            if pending_combinator.is_some() || steps.is_empty() {
                return Err(Error::UnsupportedSelector(selector.into()));
            }
            pending_combinator = Some(SelectorCombinator::Child);
            continue;
        }

        let step = parse_selector_step(&token)?;
        let combinator = if steps.is_empty() {
            None
        } else {
            Some(
                pending_combinator
                    .take()
                    .unwrap_or(SelectorCombinator::Descendant),
            )
        };
        steps.push(SelectorPart { step, combinator });
    }

    if steps.is_empty() || pending_combinator.is_some() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }

    Ok(steps)
}

fn split_selector_groups(selector: &str) -> Result<Vec<String>> {
    let mut groups = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    current.push(ch);
                }
                '[' => {
                    bracket_depth += 1;
                    current.push(ch);
                }
                ']' => {
                    if bracket_depth == 0 {
                        return Err(Error::UnsupportedSelector(selector.into()));
                    }
                    bracket_depth -= 1;
                    current.push(ch);
                }
                ',' if bracket_depth == 0 => {
                    if current.trim().is_empty() {
                        return Err(Error::UnsupportedSelector(selector.into()));
                    }
                    groups.push(std::mem::take(&mut current));
                }
                _ => current.push(ch),
            },
        }
    }

    if quote.is_some() || bracket_depth != 0 || current.trim().is_empty() {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    groups.push(current);
    Ok(groups)
}

fn tokenize_selector(selector: &str) -> Result<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    for ch in selector.chars() {
        match quote {
            Some(q) => {
                current.push(ch);
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    current.push(ch);
                }
                '[' => {
                    bracket_depth += 1;
                    current.push(ch);
                }
                ']' => {
                    if bracket_depth == 0 {
                        return Err(Error::UnsupportedSelector(selector.into()));
                    }
                    bracket_depth -= 1;
                    current.push(ch);
                }
                '>' if bracket_depth == 0 => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                    tokens.push(">".to_string());
                }
                c if c.is_whitespace() && bracket_depth == 0 => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            },
        }
    }

    if quote.is_some() || bracket_depth != 0 {
        return Err(Error::UnsupportedSelector(selector.into()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}

fn parse_selector_step(token: &str) -> Result<SelectorStep> {
    let mut step = SelectorStep::default();
    let chars: Vec<char> = token.chars().collect();
    let mut i = 0usize;

    if i < chars.len() && chars[i] == '*' {
        step.universal = true;
        i += 1;
    } else {
        let start = i;
        while i < chars.len() && is_ident_char(chars[i]) {
            i += 1;
        }
        if i > start {
            step.tag = Some(chars[start..i].iter().collect::<String>().to_ascii_lowercase());
        }
    }

    while i < chars.len() {
        match chars[i] {
            '#' => {
                i += 1;
                let start = i;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                if i == start || step.id.is_some() {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.id = Some(chars[start..i].iter().collect());
            }
            '.' => {
                i += 1;
                let start = i;
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                if i == start {
                    return Err(Error::UnsupportedSelector(token.into()));
                }
                step.classes.push(chars[start..i].iter().collect());
            }
            '[' => {
                let Some(close) = find_bracket_close(&chars, i) else {
                    return Err(Error::UnsupportedSelector(token.into()));
                };
                let inner: String = chars[i + 1..close].iter().collect();
                step.attrs.push(parse_attr_condition(&inner, token)?);
                i = close + 1;
            }
            _ => return Err(Error::UnsupportedSelector(token.into())),
        }
    }

    if step.is_empty() {
        return Err(Error::UnsupportedSelector(token.into()));
    }
    Ok(step)
}

fn parse_attr_condition(inner: &str, token: &str) -> Result<SelectorAttrCondition> {
    match inner.split_once('=') {
        None => {
            let key = inner.trim();
            if key.is_empty() || !key.chars().all(is_ident_char) {
                return Err(Error::UnsupportedSelector(token.into()));
            }
            Ok(SelectorAttrCondition::Exists {
                key: key.to_ascii_lowercase(),
            })
        }
        Some((key, value)) => {
            let key = key.trim();
            if key.is_empty() || !key.chars().all(is_ident_char) {
                return Err(Error::UnsupportedSelector(token.into()));
            }
            let value = strip_quotes(value.trim());
            Ok(SelectorAttrCondition::Eq {
                key: key.to_ascii_lowercase(),
                value: value.to_string(),
            })
        }
    }
}

fn find_bracket_close(chars: &[char], open: usize) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (offset, ch) in chars.iter().enumerate().skip(open + 1) {
        match quote {
            Some(q) => {
                if *ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '\'' | '"' => quote = Some(*ch),
                ']' => return Some(offset),
                _ => {}
            },
        }
    }
    None
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}
