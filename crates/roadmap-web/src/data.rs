//! Static card data for the non-lesson sections.
//!
//! Lesson content lives in `roadmap_core::content`; these are the supporting
//! concept and project cards shown further down the page.

pub struct Concept {
    pub title: &'static str,
    pub desc: &'static str,
}

pub fn concepts() -> Vec<Concept> {
    vec![
        Concept {
            title: "JVM & Memory Model",
            desc: "How the JVM loads classes, manages the heap and stack, and what garbage collection means for server workloads.",
        },
        Concept {
            title: "Multithreading",
            desc: "Threads, executors, and synchronization. Every request your backend serves runs on one of these.",
        },
        Concept {
            title: "Build Tools",
            desc: "Maven and Gradle: dependency management, build lifecycles, and packaging deployable artifacts.",
        },
        Concept {
            title: "Databases & JDBC",
            desc: "Connecting to relational databases, connection pooling, and mapping rows with JPA/Hibernate.",
        },
    ]
}

pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    pub stack: &'static str,
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "REST API Service",
            desc: "A CRUD service with validation, pagination, and a global exception handler.",
            stack: "Spring Boot \u{00B7} PostgreSQL",
        },
        Project {
            title: "E-commerce Backend",
            desc: "Carts, orders, and payments with transactional boundaries and role-based access.",
            stack: "Spring Boot \u{00B7} MySQL \u{00B7} Redis",
        },
        Project {
            title: "Chat Server",
            desc: "Real-time messaging over WebSockets with presence tracking and message history.",
            stack: "Spring WebSocket \u{00B7} MongoDB",
        },
    ]
}
