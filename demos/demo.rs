use deq::{Deque, End};

fn show(deque: &Deque<&str>, msg: &str) {
    println!("{}", msg);
    println!("  content: \"{}\"", deque.to_text());
    println!("  length : {}", deque.len());
}

fn main() {
    env_logger::init();

    println!("=== deque demonstration ===\n");

    let mut deque = Deque::new();
    show(&deque, "start with an empty deque:");

    deque.head_put("Head 1");
    deque.head_put("Head 2");
    deque.tail_put("Tail 1");
    deque.tail_put("Tail 2");
    show(&deque, "after putting Head 1, Head 2 at the head and Tail 1, Tail 2 at the tail:");

    if let Some(got) = deque.head_get() {
        println!("head_get -> {}", got);
    }
    show(&deque, "after removing one from the head:");

    if let Some(got) = deque.tail_get() {
        println!("tail_get -> {}", got);
    }
    show(&deque, "after removing one from the tail:");

    let new_head = "NewHead";
    deque.head_put(new_head);
    deque.tail_put("NewTail");
    show(&deque, "after putting NewHead at the head and NewTail at the tail:");

    println!("head_ith(0) -> {}", deque.head_ith(0));
    println!("head_ith(1) -> {}", deque.head_ith(1));
    println!("tail_ith(0) -> {}", deque.ith(End::Tail, 0));

    let removed = deque.tail_rem(new_head);
    println!("tail_rem(\"NewHead\") -> {}", removed.unwrap_or("(not found)"));
    show(&deque, "after removing \"NewHead\" searching from the tail:");

    println!("\ndeleting the deque");
    deque.delete();
    println!("done");
}
