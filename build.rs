fn main() {
    let src_dir = std::path::Path::new("src");

    println!("cargo:rerun-if-changed=src/parser.c");
    println!("cargo:rerun-if-changed=src/scanner.c");

    // The generated parser is vendored separately from this repository.
    // Without it, the grammar constructor is left for the final link to
    // resolve, the same way the node binding leaves it to node-gyp.
    let parser_path = src_dir.join("parser.c");
    if !parser_path.exists() {
        return;
    }

    let mut c_config = cc::Build::new();
    c_config.std("c11").include(src_dir);
    c_config.file(&parser_path);

    let scanner_path = src_dir.join("scanner.c");
    if scanner_path.exists() {
        c_config.file(&scanner_path);
    }

    c_config.compile("tree-sitter-parsley");
}
