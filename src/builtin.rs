//! Built-in text commands known to the interpreter at compile time.
//!
//! Every command is a pure `(text, args) -> text` function matching
//! [`crate::command::CommandFn`]. Flags are scanned permissively: boolean
//! switches may be clustered (`-niv`), value flags accept an attached
//! suffix (`-n5`) or a following token (`-n 5`), and anything unrecognized
//! is ignored. A command never fails; malformed input degrades to a
//! documented fallback, usually the unchanged input.

use crate::ranges::{expand_char_set, parse_range};
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Removes one leading and one trailing quote character, either kind,
/// independently.
fn strip_quotes(token: &str) -> &str {
    let token = token.strip_prefix(['"', '\'']).unwrap_or(token);
    token.strip_suffix(['"', '\'']).unwrap_or(token)
}

/// True when `token` is a cluster of single-character switches (`-abc`)
/// containing `letter`. Tokens carrying non-alphabetic payload (`-n5`,
/// `-t,`) are not clusters and never match.
fn cluster_has(token: &str, letter: char) -> bool {
    match token.strip_prefix('-') {
        Some(cluster) => {
            !cluster.is_empty()
                && cluster.chars().all(|c| c.is_ascii_alphabetic())
                && cluster.contains(letter)
        }
        None => false,
    }
}

fn has_switch(args: &[String], letter: char) -> bool {
    args.iter().any(|arg| cluster_has(arg, letter))
}

/// Line count for `head`/`tail`: `-n<value>`, `-n <value>` or a bare
/// `-<digits>`; defaults to 10. A zero or unparsable `-n` value falls back
/// to the default, negative counts clamp to zero lines.
fn line_count(args: &[String]) -> usize {
    let mut n: i64 = 10;
    for (i, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix("-n") {
            n = value
                .parse::<i64>()
                .ok()
                .filter(|v| *v != 0)
                .or_else(|| {
                    args.get(i + 1)
                        .and_then(|next| next.parse::<i64>().ok())
                        .filter(|v| *v != 0)
                })
                .unwrap_or(10);
        } else if let Some(digits) = arg.strip_prefix('-') {
            if let Ok(v) = digits.parse::<i64>() {
                n = v;
            }
        }
    }
    n.max(0) as usize
}

/// Passes the buffer through, with `-n` prefixing each line with a
/// right-aligned 1-based line number and a tab.
pub fn cat(input: &str, args: &[String]) -> String {
    if has_switch(args, 'n') {
        input
            .split('\n')
            .enumerate()
            .map(|(i, line)| format!("{:>6}\t{}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        input.to_string()
    }
}

/// Keeps lines matching the pattern operand.
///
/// Switches: `i` case-insensitive, `v` invert, `c` count instead of lines,
/// `n` prefix 1-based line numbers, `o` emit each individual match on its
/// own line (inactive under `v`). The last positional token, outer quotes
/// stripped, is the pattern; without one the input passes through, as it
/// does when the pattern is not a valid regex.
pub fn grep(input: &str, args: &[String]) -> String {
    let mut pattern = String::new();
    let mut ignore_case = false;
    let mut invert = false;
    let mut count_only = false;
    let mut number = false;
    let mut matches_only = false;

    for arg in args {
        if let Some(cluster) = arg.strip_prefix('-') {
            for flag in cluster.chars() {
                match flag {
                    'i' => ignore_case = true,
                    'v' => invert = true,
                    'c' => count_only = true,
                    'n' => number = true,
                    'o' => matches_only = true,
                    _ => {}
                }
            }
        } else {
            pattern = strip_quotes(arg).to_string();
        }
    }

    if pattern.is_empty() {
        return input.to_string();
    }
    let re = match RegexBuilder::new(&pattern)
        .case_insensitive(ignore_case)
        .build()
    {
        Ok(re) => re,
        Err(_) => return input.to_string(),
    };

    let mut records: Vec<String> = Vec::new();
    for (index, line) in input.split('\n').enumerate() {
        let hits: Vec<&str> = re.find_iter(line).map(|m| m.as_str()).collect();
        let selected = if invert { hits.is_empty() } else { !hits.is_empty() };
        if !selected {
            continue;
        }
        if matches_only && !hits.is_empty() {
            records.extend(hits.into_iter().map(str::to_string));
        } else if number {
            records.push(format!("{}:{}", index + 1, line));
        } else {
            records.push(line.to_string());
        }
    }

    // With -o active each match is its own record, so -co counts matches.
    if count_only {
        return records.len().to_string();
    }
    records.join("\n")
}

/// First `n` lines of the buffer (default 10).
pub fn head(input: &str, args: &[String]) -> String {
    let n = line_count(args);
    input.split('\n').take(n).collect::<Vec<_>>().join("\n")
}

/// Last `n` lines of the buffer (default 10).
pub fn tail(input: &str, args: &[String]) -> String {
    let n = line_count(args);
    let lines: Vec<&str> = input.split('\n').collect();
    lines[lines.len().saturating_sub(n)..].join("\n")
}

/// Counts lines, words and characters. `-l`, `-w` and `-c`/`-m` select a
/// single count; without them all three are reported space-separated.
pub fn wc(input: &str, args: &[String]) -> String {
    let lines = input.split('\n').count();
    let trimmed = input.trim();
    let words = if trimmed.is_empty() {
        0
    } else {
        trimmed.split_whitespace().count()
    };
    let chars = input.chars().count();

    if has_switch(args, 'l') {
        return lines.to_string();
    }
    if has_switch(args, 'w') {
        return words.to_string();
    }
    if has_switch(args, 'c') || has_switch(args, 'm') {
        return chars.to_string();
    }
    format!("{} {} {}", lines, words, chars)
}

/// Sorts lines: lexicographic by default, `-n` numeric (unparsable values
/// compare as zero), `-r` reverses after sorting, `-u` drops duplicates
/// after any reversal keeping first occurrences. `-t<delim>` together with
/// `-k<field>` compares a single 1-based delimiter-split field instead of
/// the whole line; a missing field compares as empty.
pub fn sort(input: &str, args: &[String]) -> String {
    let mut delimiter: Option<String> = None;
    let mut key_field: Option<usize> = None;

    for (i, arg) in args.iter().enumerate() {
        if arg == "-t" {
            if let Some(next) = args.get(i + 1) {
                delimiter = Some(strip_quotes(next).to_string());
            }
        } else if let Some(value) = arg.strip_prefix("-t") {
            delimiter = Some(strip_quotes(value).to_string());
        } else if arg == "-k" {
            if let Some(next) = args.get(i + 1) {
                key_field = next.parse::<usize>().ok().and_then(|k| k.checked_sub(1));
            }
        } else if let Some(value) = arg.strip_prefix("-k") {
            key_field = value.parse::<usize>().ok().and_then(|k| k.checked_sub(1));
        }
    }

    // -t/-k carry values, so they are excluded from the switch scan.
    let switch = |letter: char| {
        args.iter()
            .filter(|arg| !arg.starts_with("-t") && !arg.starts_with("-k"))
            .any(|arg| cluster_has(arg, letter))
    };
    let numeric = switch('n');
    let reverse = switch('r');
    let unique = switch('u');

    let mut lines: Vec<&str> = input.split('\n').collect();
    lines.sort_by(|a, b| {
        let (left, right) = match (&delimiter, key_field) {
            (Some(delim), Some(field)) => (
                a.split(delim.as_str()).nth(field).unwrap_or(""),
                b.split(delim.as_str()).nth(field).unwrap_or(""),
            ),
            _ => (*a, *b),
        };
        if numeric {
            let left = left.parse::<f64>().unwrap_or(0.0);
            let right = right.parse::<f64>().unwrap_or(0.0);
            left.partial_cmp(&right).unwrap_or(Ordering::Equal)
        } else {
            left.cmp(right)
        }
    });

    if reverse {
        lines.reverse();
    }
    if unique {
        let mut seen = HashSet::new();
        lines.retain(|line| seen.insert(*line));
    }
    lines.join("\n")
}

/// Collapses consecutive equal lines. `-c` prefixes each surviving line
/// with its right-aligned run length, `-d` keeps only lines that repeated,
/// `-u` keeps only lines that did not.
pub fn uniq(input: &str, args: &[String]) -> String {
    let count_mode = has_switch(args, 'c');
    let duplicates_only = has_switch(args, 'd');
    let unique_only = has_switch(args, 'u');

    let mut runs: Vec<(&str, usize)> = Vec::new();
    for line in input.split('\n') {
        match runs.last_mut() {
            Some(run) if run.0 == line => run.1 += 1,
            _ => runs.push((line, 1)),
        }
    }

    let mut records = Vec::new();
    for (line, count) in runs {
        if duplicates_only && count < 2 {
            continue;
        }
        if unique_only && count > 1 {
            continue;
        }
        if count_mode {
            records.push(format!("{:>7} {}", count, line));
        } else {
            records.push(line.to_string());
        }
    }
    records.join("\n")
}

/// Extracts character positions (`-c<range>`) or delimiter-split fields
/// (`-f<range>`, delimiter from `-d`, default tab) per line. Character
/// mode wins when both are given; selected-but-missing characters are
/// skipped while missing fields render as empty strings.
pub fn cut(input: &str, args: &[String]) -> String {
    let mut delimiter = String::from("\t");
    let mut fields: Option<String> = None;
    let mut chars_spec: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-d" && i + 1 < args.len() {
            delimiter = strip_quotes(&args[i + 1]).to_string();
            i += 1;
        } else if let Some(value) = arg.strip_prefix("-d") {
            delimiter = strip_quotes(value).to_string();
        } else if arg == "-f" && i + 1 < args.len() {
            fields = Some(args[i + 1].clone());
            i += 1;
        } else if let Some(value) = arg.strip_prefix("-f") {
            fields = Some(value.to_string());
        } else if arg == "-c" && i + 1 < args.len() {
            chars_spec = Some(args[i + 1].clone());
            i += 1;
        } else if let Some(value) = arg.strip_prefix("-c") {
            chars_spec = Some(value.to_string());
        }
        i += 1;
    }

    let char_positions = chars_spec.filter(|s| !s.is_empty()).map(|s| parse_range(&s));
    let field_positions = fields.filter(|s| !s.is_empty()).map(|s| parse_range(&s));

    input
        .split('\n')
        .map(|line| {
            if let Some(positions) = &char_positions {
                let chars: Vec<char> = line.chars().collect();
                positions
                    .iter()
                    .filter_map(|&pos| pos.checked_sub(1).and_then(|idx| chars.get(idx).copied()))
                    .collect::<String>()
            } else if let Some(positions) = &field_positions {
                let parts: Vec<&str> = line.split(delimiter.as_str()).collect();
                positions
                    .iter()
                    .map(|&pos| {
                        pos.checked_sub(1)
                            .and_then(|idx| parts.get(idx).copied())
                            .unwrap_or("")
                    })
                    .collect::<Vec<_>>()
                    .join(delimiter.as_str())
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Character translation over the whole buffer.
///
/// `-d <set>` deletes every character of the expanded set; `-s <set>`
/// squeezes runs of set characters down to one occurrence; two positional
/// sets translate by position, with the tail of a longer first set mapping
/// to the last character of the second. Delete wins over squeeze, squeeze
/// over translate; with no usable operands the input passes through.
pub fn tr(input: &str, args: &[String]) -> String {
    let delete_mode = has_switch(args, 'd');
    let squeeze_mode = has_switch(args, 's');

    let operands: Vec<Vec<char>> = args
        .iter()
        .filter(|arg| !arg.starts_with('-'))
        .map(|arg| expand_char_set(strip_quotes(arg)))
        .collect();

    if delete_mode {
        if let Some(set) = operands.first() {
            return input.chars().filter(|c| !set.contains(c)).collect();
        }
    }

    if squeeze_mode {
        if let Some(set) = operands.first() {
            let mut squeezed = String::new();
            let mut prev: Option<char> = None;
            for c in input.chars() {
                if prev == Some(c) && set.contains(&c) {
                    continue;
                }
                squeezed.push(c);
                prev = Some(c);
            }
            return squeezed;
        }
    }

    if let [set1, set2, ..] = operands.as_slice() {
        return input
            .chars()
            .filter_map(|c| match set1.iter().position(|&s| s == c) {
                Some(idx) => set2.get(idx).or(set2.last()).copied(),
                None => Some(c),
            })
            .collect();
    }

    input.to_string()
}

/// Reverses the characters of each line; line order is unchanged.
pub fn rev(input: &str, _args: &[String]) -> String {
    input
        .split('\n')
        .map(|line| line.chars().rev().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reverses the order of lines; characters within lines are unchanged.
pub fn tac(input: &str, _args: &[String]) -> String {
    let mut lines: Vec<&str> = input.split('\n').collect();
    lines.reverse();
    lines.join("\n")
}

/// Per-line regex substitution, `s/<pattern>/<replacement>/<flags>` only.
///
/// The pattern is matched lazily so the first viable `/` terminates it.
/// Of the accepted flag letters only `g` has an effect, switching from
/// first-match to all-matches replacement; replacements may reference
/// capture groups as `$1`, `$2`, … Any script not matching the shape, and
/// any pattern the regex engine rejects, leaves the input unchanged.
pub fn sed(input: &str, args: &[String]) -> String {
    let script = args.join(" ");
    let script = strip_quotes(&script);

    let shape = match Regex::new(r"^s/(.+?)/(.*)/([gimsu]*)$") {
        Ok(re) => re,
        Err(_) => return input.to_string(),
    };
    let caps = match shape.captures(script) {
        Some(caps) => caps,
        None => return input.to_string(),
    };
    let re = match Regex::new(&caps[1]) {
        Ok(re) => re,
        Err(_) => return input.to_string(),
    };
    let replacement = &caps[2];
    let global = caps[3].contains('g');

    input
        .split('\n')
        .map(|line| {
            if global {
                re.replace_all(line, replacement).into_owned()
            } else {
                re.replace(line, replacement).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cat_passes_through_without_flags() {
        assert_eq!(cat("a\nb", &[]), "a\nb");
    }

    #[test]
    fn test_cat_numbers_lines() {
        assert_eq!(cat("a\nb", &args(&["-n"])), "     1\ta\n     2\tb");
    }

    #[test]
    fn test_grep_keeps_matching_lines() {
        let input = "ERROR: a\nINFO: b\nERROR: c";
        assert_eq!(grep(input, &args(&["ERROR"])), "ERROR: a\nERROR: c");
    }

    #[test]
    fn test_grep_case_insensitive() {
        assert_eq!(grep("Error\nok", &args(&["-i", "error"])), "Error");
    }

    #[test]
    fn test_grep_invert() {
        let input = "ERROR: a\nINFO: b";
        assert_eq!(grep(input, &args(&["-v", "ERROR"])), "INFO: b");
    }

    #[test]
    fn test_grep_count() {
        let input = "ERROR: a\nINFO: b\nERROR: c";
        assert_eq!(grep(input, &args(&["-c", "ERROR"])), "2");
    }

    #[test]
    fn test_grep_line_numbers() {
        let input = "a\nmatch\nmatch";
        assert_eq!(grep(input, &args(&["-n", "match"])), "2:match\n3:match");
    }

    #[test]
    fn test_grep_matches_only() {
        let input = "cat dog\ndog cat";
        assert_eq!(grep(input, &args(&["-o", "cat"])), "cat\ncat");
        // -o turns every match into a record, so -c counts matches.
        assert_eq!(grep("cat cat\ncat", &args(&["-oc", "cat"])), "3");
    }

    #[test]
    fn test_grep_flag_cluster() {
        let input = "ERROR: a\ninfo: b";
        assert_eq!(grep(input, &args(&["-vn", "ERROR"])), "2:info: b");
    }

    #[test]
    fn test_grep_without_pattern_is_identity() {
        assert_eq!(grep("a\nb", &args(&["-i"])), "a\nb");
    }

    #[test]
    fn test_grep_invalid_pattern_is_identity() {
        assert_eq!(grep("a\nb", &args(&["["])), "a\nb");
    }

    #[test]
    fn test_head_default_is_ten() {
        let input = (1..=12).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let expected = (1..=10).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        assert_eq!(head(&input, &[]), expected);
    }

    #[test]
    fn test_head_count_forms() {
        let input = "a\nb\nc\nd";
        assert_eq!(head(input, &args(&["-n2"])), "a\nb");
        assert_eq!(head(input, &args(&["-n", "2"])), "a\nb");
        assert_eq!(head(input, &args(&["-2"])), "a\nb");
    }

    #[test]
    fn test_head_zero_count_falls_back_to_default() {
        let input = "a\nb\nc";
        assert_eq!(head(input, &args(&["-n0"])), "a\nb\nc");
        assert_eq!(head(input, &args(&["-nx"])), "a\nb\nc");
    }

    #[test]
    fn test_tail_count_forms() {
        let input = "a\nb\nc\nd";
        assert_eq!(tail(input, &args(&["-n2"])), "c\nd");
        assert_eq!(tail(input, &args(&["-2"])), "c\nd");
    }

    #[test]
    fn test_tail_count_beyond_input() {
        assert_eq!(tail("a\nb", &args(&["-5"])), "a\nb");
    }

    #[test]
    fn test_wc_reports_all_counts() {
        assert_eq!(wc("one two\nthree", &[]), "2 3 13");
    }

    #[test]
    fn test_wc_single_counts() {
        let input = "one two\nthree";
        assert_eq!(wc(input, &args(&["-l"])), "2");
        assert_eq!(wc(input, &args(&["-w"])), "3");
        assert_eq!(wc(input, &args(&["-c"])), "13");
        assert_eq!(wc(input, &args(&["-m"])), "13");
    }

    #[test]
    fn test_wc_whitespace_only_has_no_words() {
        assert_eq!(wc("  \n ", &[]), "2 0 4");
    }

    #[test]
    fn test_sort_lexicographic() {
        assert_eq!(sort("pear\napple\nfig", &[]), "apple\nfig\npear");
    }

    #[test]
    fn test_sort_numeric() {
        assert_eq!(sort("30\n2\n100\n4", &args(&["-n"])), "2\n4\n30\n100");
    }

    #[test]
    fn test_sort_numeric_unparsable_is_zero() {
        assert_eq!(sort("5\nx\n-1", &args(&["-n"])), "-1\nx\n5");
    }

    #[test]
    fn test_sort_reverse_after_sorting() {
        assert_eq!(sort("b\nc\na", &args(&["-r"])), "c\nb\na");
    }

    #[test]
    fn test_sort_unique_after_reverse() {
        assert_eq!(sort("b\na\nb", &args(&["-ru"])), "b\na");
    }

    #[test]
    fn test_sort_by_field() {
        let input = "alice,90\nbob,85";
        assert_eq!(
            sort(input, &args(&["-t,", "-k2", "-n"])),
            "bob,85\nalice,90"
        );
        assert_eq!(
            sort(input, &args(&["-t", ",", "-k", "2", "-n"])),
            "bob,85\nalice,90"
        );
    }

    #[test]
    fn test_sort_missing_field_compares_empty() {
        let input = "b,2\na";
        assert_eq!(sort(input, &args(&["-t,", "-k2"])), "a\nb,2");
    }

    #[test]
    fn test_sort_field_needs_both_delim_and_key() {
        // -k alone keeps whole-line comparison.
        assert_eq!(sort("b,1\na,2", &args(&["-k2"])), "a,2\nb,1");
    }

    #[test]
    fn test_uniq_collapses_runs() {
        assert_eq!(uniq("a\na\nb\na", &[]), "a\nb\na");
    }

    #[test]
    fn test_uniq_counts() {
        assert_eq!(uniq("a\na\nb", &args(&["-c"])), "      2 a\n      1 b");
    }

    #[test]
    fn test_uniq_duplicates_only() {
        assert_eq!(uniq("a\na\nb\nc\nc", &args(&["-d"])), "a\nc");
    }

    #[test]
    fn test_uniq_unique_only() {
        assert_eq!(uniq("a\na\nb\nc\nc", &args(&["-u"])), "b");
    }

    #[test]
    fn test_cut_characters() {
        assert_eq!(cut("abcdef", &args(&["-c2-4"])), "bcd");
        assert_eq!(cut("abcdef", &args(&["-c1,3,5"])), "ace");
    }

    #[test]
    fn test_cut_characters_past_end_are_skipped() {
        assert_eq!(cut("ab", &args(&["-c1-5"])), "ab");
    }

    #[test]
    fn test_cut_fields_with_delimiter() {
        assert_eq!(cut("alice,eng,90000", &args(&["-d,", "-f1,3"])), "alice,90000");
        assert_eq!(
            cut("alice,eng,90000", &args(&["-d", ",", "-f", "1,3"])),
            "alice,90000"
        );
    }

    #[test]
    fn test_cut_default_delimiter_is_tab() {
        assert_eq!(cut("a\tb\tc", &args(&["-f2"])), "b");
    }

    #[test]
    fn test_cut_missing_fields_render_empty() {
        assert_eq!(cut("a,b", &args(&["-d,", "-f1,5"])), "a,");
    }

    #[test]
    fn test_cut_character_mode_wins() {
        assert_eq!(cut("abc,def", &args(&["-c1", "-d,", "-f2"])), "a");
    }

    #[test]
    fn test_cut_without_selector_is_identity() {
        assert_eq!(cut("a,b", &args(&["-d,"])), "a,b");
    }

    #[test]
    fn test_tr_translates_ranges() {
        assert_eq!(tr("hello", &args(&["a-z", "A-Z"])), "HELLO");
        assert_eq!(tr("HELLO", &args(&["A-Z", "a-z"])), "hello");
    }

    #[test]
    fn test_tr_shorter_second_set_clamps_to_last() {
        assert_eq!(tr("abcd", &args(&["a-d", "xy"])), "xyyy");
    }

    #[test]
    fn test_tr_delete() {
        assert_eq!(tr("abcdef", &args(&["-d", "a-c"])), "def");
    }

    #[test]
    fn test_tr_squeeze() {
        assert_eq!(tr("hellll", &args(&["-s", "l"])), "hel");
        // Repeats outside the set are untouched.
        assert_eq!(tr("aabb", &args(&["-s", "a"])), "abb");
    }

    #[test]
    fn test_tr_without_operands_is_identity() {
        assert_eq!(tr("abc", &[]), "abc");
        assert_eq!(tr("abc", &args(&["-d"])), "abc");
    }

    #[test]
    fn test_rev_reverses_each_line() {
        assert_eq!(rev("abc\nde", &[]), "cba\ned");
    }

    #[test]
    fn test_tac_reverses_line_order() {
        assert_eq!(tac("a\nb\nc", &[]), "c\nb\na");
    }

    #[test]
    fn test_sed_first_match_per_line() {
        assert_eq!(sed("hello hello", &args(&["s/hello/hi/"])), "hi hello");
    }

    #[test]
    fn test_sed_global() {
        assert_eq!(sed("hello hello", &args(&["s/hello/hi/g"])), "hi hi");
    }

    #[test]
    fn test_sed_applies_per_line() {
        assert_eq!(sed("aa\nba", &args(&["s/a/x/"])), "xa\nbx");
    }

    #[test]
    fn test_sed_capture_references() {
        assert_eq!(
            sed("john smith", &args(&[r"s/(\w+) (\w+)/$2 $1/"])),
            "smith john"
        );
    }

    #[test]
    fn test_sed_quoted_script() {
        assert_eq!(sed("a b", &args(&["s/a b/c/"])), "c");
    }

    #[test]
    fn test_sed_malformed_script_is_identity() {
        assert_eq!(sed("abc", &args(&["y/a/b/"])), "abc");
        assert_eq!(sed("abc", &args(&["s/a/b"])), "abc");
        assert_eq!(sed("abc", &[]), "abc");
    }

    #[test]
    fn test_sed_invalid_pattern_is_identity() {
        assert_eq!(sed("abc", &args(&["s/[/x/"])), "abc");
    }

    #[test]
    fn test_strip_quotes_is_unpaired() {
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("\"abc'"), "abc");
        assert_eq!(strip_quotes("abc"), "abc");
        assert_eq!(strip_quotes("'"), "");
    }
}
