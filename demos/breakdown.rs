//! Break a pattern down and print the matches of each line.

use regularish::{RegexCompiler, build_segments, compile_with, describe, match_lines, tokenize};

fn main() {
    let pattern = r"(\w+)@(\w+)\.com";
    let input = "\
mail alice@example.com today
nobody here
bob@test.com or carol@site.com";

    println!("Pattern: {pattern}");
    for token in tokenize(pattern) {
        println!("  {:<8} {}", token.text, describe(&token));
    }

    let matcher = compile_with(&RegexCompiler::new(), pattern, "g").expect("pattern compiles");
    let result = match_lines(Some(&matcher), input);

    println!("\nMatches:");
    for (line, spans) in result.lines.iter().zip(&result.spans) {
        let rendered: String = build_segments(line, spans)
            .iter()
            .map(|s| {
                if s.matched {
                    format!("[{}]", s.text)
                } else {
                    s.text.to_string()
                }
            })
            .collect();
        println!("  {rendered}");
    }

    println!("\nCaptures:");
    for (index, set) in result.captures.iter().enumerate() {
        println!("  Match {}: {}", index + 1, set.join(", "));
    }
}
