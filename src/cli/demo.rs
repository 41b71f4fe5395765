use std::collections::VecDeque;

use miette::Result;
use stacks::{BoundedStack, PointerStack, Stack, StackError, StringStack};

pub const NAMES: [&str; 6] = ["basic", "backing", "bounded", "pointer", "string", "assign"];

type Lines = Result<Vec<String>, StackError>;

pub fn run(name: &str) -> Result<()> {
    let names: Vec<&str> = match name {
        "all" => NAMES.to_vec(),
        name => vec![name],
    };

    for name in names {
        println!("== {name}");
        let lines = lines(name).map_err(StackError::into_err_report)?;
        for line in lines {
            println!("{line}");
        }
    }
    Ok(())
}

fn lines(name: &str) -> Lines {
    match name {
        "basic" => basic(),
        "backing" => backing(),
        "bounded" => bounded(),
        "pointer" => pointer(),
        "string" => string(),
        "assign" => assign(),
        _ => Ok(Vec::new()),
    }
}

// One value stack and one string stack with the default backing.
fn basic() -> Lines {
    let mut ints: Stack<i32> = Stack::new();
    let mut strings: Stack<String> = Stack::new();

    ints.push(7);
    strings.push("hello".to_owned());
    let lines = vec![ints.top()?.to_string(), strings.top()?.clone()];
    strings.pop()?;

    Ok(lines)
}

fn backing() -> Lines {
    let mut ints: Stack<i32> = Stack::new();
    let mut doubles: Stack<f64, VecDeque<f64>> = Stack::new();

    ints.push(7);
    let mut lines = vec![ints.top()?.to_string()];
    ints.pop()?;

    doubles.push(42.42);
    lines.push(doubles.top()?.to_string());
    doubles.pop()?;

    Ok(lines)
}

fn bounded() -> Lines {
    let mut int20: BoundedStack<i32, 20> = BoundedStack::new();
    let mut int40: BoundedStack<i32, 40> = BoundedStack::new();
    let mut strings: BoundedStack<String, 40> = BoundedStack::new();

    int20.push(7)?;
    int40.push(8)?;
    strings.push("hello".to_owned())?;

    let lines = vec![
        format!("{} (size {} of {})", int20.top()?, int20.len(), int20.capacity()),
        format!("{} (size {} of {})", int40.top()?, int40.len(), int40.capacity()),
        format!("{} (size {} of {})", strings.top()?, strings.len(), strings.capacity()),
    ];

    int20.pop()?;
    strings.pop()?;
    Ok(lines)
}

fn pointer() -> Lines {
    let mut x = 1;
    let mut y = 2;

    let mut addresses: PointerStack<i32> = PointerStack::new();
    addresses.push_ref(&mut x);
    addresses.push_ref(&mut y);

    let first = addresses.pop()?;
    let second = addresses.pop()?;

    Ok(vec![
        format!("popped {first:p} then {second:p}"),
        format!("x = {x}, y = {y}"),
    ])
}

fn string() -> Lines {
    let mut strings = StringStack::new();
    strings.push("hello");
    let lines = vec![strings.top()?.to_owned()];
    strings.pop()?;
    Ok(lines)
}

// Assignment across element types and across backings.
fn assign() -> Lines {
    let mut ints: Stack<i32, VecDeque<i32>> = Stack::new();
    let mut floats: Stack<f64, VecDeque<f64>> = Stack::new();

    ints.push(1);
    ints.push(2);
    floats.push(3.3);

    let mut lines = vec![
        format!("ints.top(): {}", ints.top()?),
        format!("floats.top(): {}", floats.top()?),
    ];

    floats.assign_from(&ints);
    floats.push(4.4);
    lines.push(format!("floats.top(): {}", floats.top()?));

    let mut vector: Stack<f64> = Stack::new();
    vector.push(5.5);
    vector.push(6.6);
    lines.push(format!("vector.top(): {}", vector.top()?));

    vector.assign_from(&floats);
    let mut drained = Vec::with_capacity(vector.len());
    while !vector.is_empty() {
        drained.push(vector.top()?.to_string());
        vector.pop()?;
    }
    lines.push(format!("vector: {}", drained.join(" ")));

    Ok(lines)
}
