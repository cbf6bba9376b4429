use dom::Node;
use dom::dom_utils::{assign_node_ids, outline};
use events::{Event, EventBus};
use mimalloc::MiMalloc;
use navbar::{NavbarSelectors, install};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn demo_page() -> Node {
    Node::document(vec![Node::element(
        "body",
        &[],
        vec![
            Node::element(
                "nav",
                &[("class", "navbar")],
                vec![
                    Node::element(
                        "a",
                        &[("class", "brand"), ("href", "/")],
                        vec![Node::text("navkit")],
                    ),
                    Node::element(
                        "button",
                        &[("class", "mobile-menu-toggle"), ("aria-label", "menu")],
                        vec![Node::text("=")],
                    ),
                    Node::element(
                        "ul",
                        &[("class", "mobile-menu-items")],
                        vec![
                            Node::element("li", &[], vec![Node::text("Home")]),
                            Node::element("li", &[], vec![Node::text("About")]),
                        ],
                    ),
                ],
            ),
            Node::element("main", &[], vec![Node::text("Scroll me")]),
        ],
    )])
}

fn print_outline(label: &str, dom: &Node) {
    println!("-- {label}");
    for line in outline(dom, 32) {
        println!("{line}");
    }
    println!();
}

fn main() {
    let mut dom = demo_page();
    assign_node_ids(&mut dom);

    let mut bus = EventBus::new();
    let installed = match install(&dom, &mut bus, &NavbarSelectors::default()) {
        Ok(installed) => installed,
        Err(err) => {
            eprintln!("navbar install failed: {err:?}");
            std::process::exit(1);
        }
    };

    print_outline("page ready", &dom);

    let script = [
        (
            "click toggle",
            Event::Click {
                target: installed.toggle,
            },
        ),
        (
            "click toggle again",
            Event::Click {
                target: installed.toggle,
            },
        ),
        ("scroll to 50px", Event::Scroll { offset_y: 50.0 }),
        ("scroll to 50px again", Event::Scroll { offset_y: 50.0 }),
        ("scroll back to top", Event::Scroll { offset_y: 0.0 }),
        (
            "click toggle",
            Event::Click {
                target: installed.toggle,
            },
        ),
    ];
    for (label, event) in script {
        bus.dispatch(&event, &mut dom);
        print_outline(label, &dom);
    }
}
