//! Slash-separated element paths such as `class/property[@name='Age']/column`.

use super::Element;

#[derive(Debug, PartialEq, Eq)]
enum Predicate {
    Has(String),
    Equals(String, String),
    Position(usize),
}

#[derive(Debug, PartialEq, Eq)]
struct Step {
    name: String,
    predicates: Vec<Predicate>,
}

impl Step {
    fn parse(segment: &str) -> Option<Self> {
        let (name, mut rest) = segment
            .find('[')
            .map_or((segment, ""), |at| segment.split_at(at));
        if name.is_empty() {
            return None;
        }
        let mut predicates = Vec::new();
        while !rest.is_empty() {
            let body_end = rest.find(']')?;
            let body = rest.get(1..body_end)?;
            predicates.push(Predicate::parse(body)?);
            rest = rest.get(body_end + 1..)?;
            if !rest.is_empty() && !rest.starts_with('[') {
                return None;
            }
        }
        Some(Self {
            name: name.to_owned(),
            predicates,
        })
    }

    fn matches_name(&self, element: &Element) -> bool {
        self.name == "*" || self.name == element.name()
    }
}

impl Predicate {
    fn parse(body: &str) -> Option<Self> {
        let Some(attribute) = body.strip_prefix('@') else {
            return body
                .trim()
                .parse()
                .ok()
                .filter(|&position| position > 0)
                .map(Self::Position);
        };
        match attribute.split_once('=') {
            None => Some(Self::Has(attribute.trim().to_owned())),
            Some((name, raw)) => {
                let quoted = raw.trim();
                let value = quoted
                    .strip_prefix('\'')
                    .and_then(|v| v.strip_suffix('\''))
                    .or_else(|| quoted.strip_prefix('"').and_then(|v| v.strip_suffix('"')))?;
                Some(Self::Equals(name.trim().to_owned(), value.to_owned()))
            }
        }
    }
}

/// A parsed element path.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct ElementPath {
    steps: Vec<Step>,
}

impl ElementPath {
    /// Parse `path`, returning `None` when it is malformed.
    pub(super) fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        let steps = trimmed
            .split('/')
            .map(Step::parse)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { steps })
    }

    /// Every element reached by walking the path from `candidates`.
    pub(super) fn select<'e>(&self, candidates: &[&'e Element]) -> Vec<&'e Element> {
        let mut current: Vec<&'e Element> = candidates.to_vec();
        for (depth, step) in self.steps.iter().enumerate() {
            let pool: Vec<Vec<&'e Element>> = if depth == 0 {
                vec![current]
            } else {
                current
                    .iter()
                    .map(|parent| parent.children().iter().collect())
                    .collect()
            };
            current = pool
                .into_iter()
                .flat_map(|siblings| filter_step(step, siblings))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }
}

fn filter_step<'e>(step: &Step, siblings: Vec<&'e Element>) -> Vec<&'e Element> {
    let mut matched: Vec<&'e Element> = siblings
        .into_iter()
        .filter(|element| step.matches_name(element))
        .collect();
    for predicate in &step.predicates {
        matched = match predicate {
            Predicate::Has(name) => matched
                .into_iter()
                .filter(|element| element.has_attribute(name))
                .collect(),
            Predicate::Equals(name, value) => matched
                .into_iter()
                .filter(|element| element.attribute(name) == Some(value.as_str()))
                .collect(),
            Predicate::Position(position) => matched
                .get(position - 1)
                .copied()
                .into_iter()
                .collect(),
        };
    }
    matched
}
