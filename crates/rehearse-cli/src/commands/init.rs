//! The `rehearse init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("rehearse.toml"), SAMPLE_CRITERIA)?;

    std::fs::create_dir_all("banks")?;
    write_if_missing(Path::new("banks/example.toml"), EXAMPLE_BANK)?;

    std::fs::create_dir_all("answers")?;
    write_if_missing(Path::new("answers/example.toml"), EXAMPLE_ANSWERS)?;

    println!("\nNext steps:");
    println!("  1. Edit rehearse.toml to tune weights and thresholds");
    println!("  2. Run: rehearse validate --bank banks/example.toml");
    println!("  3. Run: rehearse batch --bank banks/example.toml --answers answers/example.toml");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CRITERIA: &str = r#"# rehearse scoring criteria
# Every field is optional; omitted fields keep their default.

locale = "zh"

[weights]
coverage = 0.6
completeness = 0.3
clarity = 0.1

[key_points]
min_line_len = 5
max_line_len = 100
min_fragment_len = 5
fallback_threshold = 3

[completeness]
length_weight = 0.7
structure_weight = 0.3
max_length_ratio = 1.5

[clarity]
sentence_length_weight = 0.7
punctuation_weight = 0.3
ideal_sentence_min = 10.0
ideal_sentence_max = 40.0

[grades]
excellent = 90
good = 75
average = 60
poor = 40

[feedback]
max_missing_listed = 3
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Question Bank"
description = "A small bank to get started"

[[categories]]
id = "redis"
name = "Redis"

[[questions]]
id = "redis-1"
category = "redis"
question = "Redis的数据类型有哪些？"
answer = """
Redis支持五种数据类型：
1. 字符串（String）：最基本的数据类型，可以存储字符串、整数或浮点数。
2. 列表（List）：按照插入顺序排序的字符串元素集合。
3. 集合（Set）：无序且唯一的字符串元素集合。
4. 有序集合（Sorted Set）：类似集合，但每个元素关联一个分数，用于排序。
5. 哈希表（Hash）：键值对的无序集合，适合存储对象。
"""
"#;

const EXAMPLE_ANSWERS: &str = r#"[[answers]]
question = "redis-1"
answer = """
Redis有字符串、列表、集合、有序集合和哈希表。
列表（List）：按照插入顺序排序的字符串元素集合。
哈希表（Hash）：键值对的无序集合。
"""
"#;
