//! Range notation used by sysfs CPU lists, e.g. `0-23,48-71`.

use crate::collector::error::ParseError;

/// Expands a CPU list into explicit CPU numbers.
///
/// Each comma separated component is either `N` or an inclusive range `N-M`.
/// Component order is preserved and duplicates are kept. An empty input
/// (the usual content of `offline`) yields an empty list.
///
/// Malformed components contribute nothing and are returned alongside the
/// CPUs that did parse, so one bad component never hides the others.
pub fn parse_cpu_list(value: &str) -> (Vec<u32>, Vec<ParseError>) {
    let mut cpus = Vec::new();
    let mut errors = Vec::new();

    let value = value.trim();
    if value.is_empty() {
        return (cpus, errors);
    }

    for component in value.split(',') {
        match parse_component(component.trim()) {
            Ok((first, last)) => cpus.extend(first..=last),
            Err(e) => errors.push(e),
        }
    }

    (cpus, errors)
}

fn parse_component(component: &str) -> Result<(u32, u32), ParseError> {
    let parse_bound = |s: &str| -> Result<u32, ParseError> {
        s.trim().parse().map_err(|e| {
            ParseError::new(format!(
                "invalid cpu number {:?} in {:?}: {}",
                s, component, e
            ))
        })
    };

    match component.split_once('-') {
        Some((first, last)) => {
            let first = parse_bound(first)?;
            let last = parse_bound(last)?;
            if last < first {
                return Err(ParseError::new(format!("descending range {:?}", component)));
            }
            Ok((first, last))
        }
        None => {
            let cpu = parse_bound(component)?;
            Ok((cpu, cpu))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpu_list_single_range() {
        let (cpus, errors) = parse_cpu_list("0-2");
        assert_eq!(cpus, vec![0, 1, 2]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_cpu_list_multiple_ranges() {
        let (cpus, _) = parse_cpu_list("0-1,8-9");
        assert_eq!(cpus, vec![0, 1, 8, 9]);

        let (cpus, _) = parse_cpu_list("0-23,48-71\n");
        assert_eq!(cpus.len(), 48);
        assert_eq!(cpus[23], 23);
        assert_eq!(cpus[24], 48);
        assert_eq!(cpus.last(), Some(&71));
    }

    #[test]
    fn test_parse_cpu_list_bare_numbers() {
        let (cpus, errors) = parse_cpu_list("0");
        assert_eq!(cpus, vec![0]);
        assert!(errors.is_empty());

        let (cpus, _) = parse_cpu_list("0-3,5,7-8");
        assert_eq!(cpus, vec![0, 1, 2, 3, 5, 7, 8]);
    }

    #[test]
    fn test_parse_cpu_list_preserves_order_and_duplicates() {
        let (cpus, _) = parse_cpu_list("8-9,0-1,1");
        assert_eq!(cpus, vec![8, 9, 0, 1, 1]);
    }

    #[test]
    fn test_parse_cpu_list_empty() {
        let (cpus, errors) = parse_cpu_list("\n");
        assert!(cpus.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_parse_cpu_list_malformed_component_is_skipped() {
        let (cpus, errors) = parse_cpu_list("0-1,x-3,4");
        assert_eq!(cpus, vec![0, 1, 4]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("x-3"));
    }

    #[test]
    fn test_parse_cpu_list_descending_range() {
        let (cpus, errors) = parse_cpu_list("5-2,7");
        assert_eq!(cpus, vec![7]);
        assert!(errors[0].message.contains("descending"));
    }

    #[test]
    fn test_parse_cpu_list_too_many_hyphens() {
        let (cpus, errors) = parse_cpu_list("1-2-3");
        assert!(cpus.is_empty());
        assert_eq!(errors.len(), 1);
    }
}
