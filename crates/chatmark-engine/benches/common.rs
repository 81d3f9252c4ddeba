// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_answer(size: usize) -> String {
    let base = "## Answer\n\nHere is **one way** to do it with `iter()`:\n\n1. Collect the items\n2. Sort them\n- keep *order* stable\n- avoid `clone()`\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\nLet me know if you need more detail.\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_code_heavy(blocks: usize) -> String {
    let mut content = String::new();
    for i in 0..blocks {
        content.push_str(&format!("Step {i}:\n```python\nprint({i})\nx = a < b\n```\n"));
    }
    content
}
