//! Static lesson content for the roadmap topics.
//!
//! One [`Lesson`] per topic card, keyed by a short id that the modal uses to
//! look the record up. The table is a compile-time literal and is never
//! mutated; the code samples are opaque text rendered verbatim.

/// A single lesson topic shown in the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    /// Unique topic key, e.g. `"variables"`.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Heading over the key-points list ("Backend Importance" and friends).
    pub importance: &'static str,
    pub points: &'static [&'static str],
    /// Raw sample code, displayed as-is in a code block.
    pub code_sample: &'static str,
    pub tips: &'static [&'static str],
}

impl Lesson {
    /// The card text the live search filters against: everything visible on
    /// the collapsed topic card.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// The full lesson table, in page order.
#[must_use]
pub fn lessons() -> &'static [Lesson] {
    LESSONS
}

/// Look up a lesson by topic id. Unknown ids yield `None`; callers treat
/// that as "do nothing", not as an error.
#[must_use]
pub fn lesson(id: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.id == id)
}

const LESSONS: &[Lesson] = &[
    Lesson {
        id: "variables",
        title: "Variables & Data Types",
        description: "Variables are containers that store data values in memory. In backend development, they are essential for handling user input, storing database results, and managing API responses.",
        importance: "Backend Importance",
        points: &[
            "Store user credentials and session data",
            "Hold database query results",
            "Manage API request and response data",
            "Control application state",
        ],
        code_sample: r#"// Primitive Data Types
int userId = 101;
long timestamp = System.currentTimeMillis();
double price = 99.99;
boolean isActive = true;

// Reference Types
String username = "Yogesh";
String email = "user@example.com";

// In Backend Context
public class UserSession {
    private int userId;
    private String token;
    private boolean isAuthenticated;

    // Getters and setters
}"#,
        tips: &[
            "Choose appropriate data types for efficiency",
            "Use meaningful variable names",
            "Follow naming conventions (camelCase)",
            "Initialize variables before use",
        ],
    },
    Lesson {
        id: "control",
        title: "Control Statements",
        description: "Control statements allow you to make decisions and repeat operations in your code. They are fundamental for implementing business logic in backend applications.",
        importance: "Backend Use Cases",
        points: &[
            "Validate user input before processing",
            "Apply business rules and conditions",
            "Process multiple database records",
            "Handle different API request types",
        ],
        code_sample: r#"// If-Else for Validation
if (userAge >= 18) {
    System.out.println("Access Granted");
} else {
    System.out.println("Access Denied");
}

// Switch for Request Routing
switch (httpMethod) {
    case "GET":
        handleGetRequest();
        break;
    case "POST":
        handlePostRequest();
        break;
    default:
        handleUnsupportedMethod();
}

// For Loop for Processing
for (int i = 0; i < users.size(); i++) {
    processUser(users.get(i));
}

// While Loop
while (hasMoreData()) {
    processNextBatch();
}"#,
        tips: &[
            "Use appropriate control structures",
            "Avoid deep nesting",
            "Consider using enhanced for-loops",
            "Handle edge cases",
        ],
    },
    Lesson {
        id: "methods",
        title: "Methods",
        description: "Methods are reusable blocks of code that perform specific tasks. Backend applications are built around well-designed methods in services, repositories, and controllers.",
        importance: "Why Methods Matter",
        points: &[
            "Promote code reusability",
            "Improve code organization",
            "Enable easy testing",
            "Support separation of concerns",
        ],
        code_sample: r#"// Service Method
public User getUserById(int id) {
    return userRepository.findById(id)
        .orElseThrow(() -> new UserNotFoundException());
}

// Validation Method
public boolean isValidEmail(String email) {
    String regex = "^[A-Za-z0-9+_.-]+@(.+)$";
    return email.matches(regex);
}

// Processing Method
public List<User> getActiveUsers() {
    return users.stream()
        .filter(User::isActive)
        .collect(Collectors.toList());
}

// Method Overloading
public User saveUser(User user) { }
public User saveUser(String name, String email) { }"#,
        tips: &[
            "Keep methods focused (Single Responsibility)",
            "Use descriptive method names",
            "Limit parameters (max 3-4)",
            "Return meaningful values",
        ],
    },
    Lesson {
        id: "arrays",
        title: "Arrays",
        description: "Arrays are fixed-size data structures that store elements of the same type. While Collections are preferred in modern Java, arrays are still used internally and in certain scenarios.",
        importance: "Backend Usage",
        points: &[
            "Store fixed sets of data",
            "Used in framework internals",
            "Performance-critical operations",
            "Working with varargs",
        ],
        code_sample: r#"// Declaring Arrays
int[] userIds = {1, 2, 3, 4, 5};
String[] roles = new String[3];

// Array Operations
roles[0] = "USER";
roles[1] = "ADMIN";
roles[2] = "MODERATOR";

// Iterating Arrays
for (int id : userIds) {
    System.out.println("User ID: " + id);
}

// Multi-dimensional Arrays
String[][] permissions = {
    {"read", "write"},
    {"read"},
    {"read", "write", "delete"}
};"#,
        tips: &[
            "Prefer Collections for flexibility",
            "Check bounds before accessing",
            "Use Arrays.toString() for debugging",
            "Consider ArrayList for dynamic sizing",
        ],
    },
    Lesson {
        id: "strings",
        title: "Strings",
        description: "Strings are sequences of characters and are immutable in Java. They are crucial in backend development for handling text data from APIs, databases, and user input.",
        importance: "Backend Importance",
        points: &[
            "Process API requests and responses",
            "Parse and generate JSON data",
            "Handle URLs and query parameters",
            "Validate and sanitize user input",
        ],
        code_sample: r#"// String Operations
String email = "user@example.com";
String domain = email.substring(email.indexOf("@") + 1);
String upperEmail = email.toUpperCase();

// String Concatenation
String fullName = firstName + " " + lastName;
String url = "https://api.example.com/" + endpoint;

// StringBuilder (for multiple operations)
StringBuilder query = new StringBuilder();
query.append("SELECT * FROM users WHERE ");
query.append("status = 'active' AND ");
query.append("age >= 18");

// String Formatting
String message = String.format("User %s logged in at %s",
    username, timestamp);"#,
        tips: &[
            "Use StringBuilder for multiple concatenations",
            "Always validate user-provided strings",
            "Be careful with null values",
            "Use proper encoding for URLs",
        ],
    },
    Lesson {
        id: "oop",
        title: "Object-Oriented Programming",
        description: "OOP is a programming paradigm based on objects that contain data and methods. It is fundamental to building maintainable and scalable backend applications.",
        importance: "OOP in Backend",
        points: &[
            "Model real-world entities (User, Product, Order)",
            "Organize code into logical units",
            "Enable code reuse through inheritance",
            "Encapsulate business logic",
        ],
        code_sample: r#"// Class and Object
public class User {
    private int id;
    private String name;
    private String email;

    // Constructor
    public User(int id, String name) {
        this.id = id;
        this.name = name;
    }

    // Encapsulation
    public String getEmail() {
        return email;
    }

    public void setEmail(String email) {
        if (isValidEmail(email)) {
            this.email = email;
        }
    }
}

// Inheritance
public class Admin extends User {
    private String adminLevel;

    @Override
    public void performAction() {
        // Admin-specific implementation
    }
}

// Polymorphism
List<User> users = new ArrayList<>();
users.add(new User(1, "John"));
users.add(new Admin(2, "Jane"));"#,
        tips: &[
            "Use private fields with public getters/setters",
            "Favor composition over inheritance",
            "Follow SOLID principles",
            "Design for interfaces, not implementations",
        ],
    },
    Lesson {
        id: "interfaces",
        title: "Interfaces",
        description: "Interfaces define contracts that classes must implement. Spring Framework heavily relies on interfaces for dependency injection and loose coupling.",
        importance: "Why Interfaces Matter",
        points: &[
            "Define service contracts",
            "Enable dependency injection",
            "Support multiple implementations",
            "Facilitate testing with mocks",
        ],
        code_sample: r#"// Service Interface
public interface UserService {
    User findById(int id);
    User save(User user);
    void delete(int id);
    List<User> findAll();
}

// Implementation
@Service
public class UserServiceImpl implements UserService {

    @Autowired
    private UserRepository userRepository;

    @Override
    public User findById(int id) {
        return userRepository.findById(id)
            .orElseThrow(() -> new UserNotFoundException());
    }

    // Other method implementations...
}

// Usage in Controller
@RestController
public class UserController {

    @Autowired
    private UserService userService; // Interface type

    @GetMapping("/users/{id}")
    public User getUser(@PathVariable int id) {
        return userService.findById(id);
    }
}"#,
        tips: &[
            "Design interfaces before implementations",
            "Keep interfaces focused and cohesive",
            "Use interface types for dependencies",
            "Consider functional interfaces for lambdas",
        ],
    },
    Lesson {
        id: "abstract",
        title: "Abstract Classes",
        description: "Abstract classes provide partial implementations and can have both abstract and concrete methods. They are useful for sharing common code among related classes.",
        importance: "When to Use",
        points: &[
            "Share common code among subclasses",
            "Define template methods",
            "Provide default implementations",
            "Model \"is-a\" relationships",
        ],
        code_sample: r#"// Abstract Payment Class
public abstract class Payment {
    protected double amount;
    protected String currency;

    // Concrete method
    public void validateAmount() {
        if (amount <= 0) {
            throw new IllegalArgumentException();
        }
    }

    // Abstract method
    public abstract void processPayment();

    // Template method
    public final void makePayment() {
        validateAmount();
        processPayment();
        sendConfirmation();
    }

    protected void sendConfirmation() {
        System.out.println("Payment confirmed");
    }
}

// Concrete Implementation
public class CreditCardPayment extends Payment {
    private String cardNumber;

    @Override
    public void processPayment() {
        // Credit card specific logic
        System.out.println("Processing credit card payment");
    }
}

public class PayPalPayment extends Payment {
    private String paypalEmail;

    @Override
    public void processPayment() {
        // PayPal specific logic
        System.out.println("Processing PayPal payment");
    }
}"#,
        tips: &[
            "Use when you have common behavior",
            "Cannot instantiate abstract classes",
            "Can have constructors and fields",
            "Choose interfaces for contracts, abstract classes for code reuse",
        ],
    },
    Lesson {
        id: "collections",
        title: "Collections Framework",
        description: "The Collections Framework provides data structures for storing and manipulating groups of objects. Essential for backend development when working with lists of data.",
        importance: "Backend Usage",
        points: &[
            "Store and manage database results",
            "Process multiple API responses",
            "Implement caching mechanisms",
            "Handle batch operations",
        ],
        code_sample: r#"// List - Ordered collection
List<User> users = new ArrayList<>();
users.add(new User(1, "John"));
users.add(new User(2, "Jane"));

// Set - Unique elements
Set<String> uniqueEmails = new HashSet<>();
uniqueEmails.add("user@example.com");

// Map - Key-value pairs
Map<Integer, User> userMap = new HashMap<>();
userMap.put(1, new User(1, "John"));
User user = userMap.get(1);

// Common Operations
users.forEach(u -> System.out.println(u.getName()));
users.stream()
     .filter(u -> u.isActive())
     .sorted(Comparator.comparing(User::getName))
     .collect(Collectors.toList());

// Queue for background tasks
Queue<Task> taskQueue = new LinkedList<>();
taskQueue.offer(new Task("Send Email"));"#,
        tips: &[
            "Choose the right collection for your needs",
            "Use generics for type safety",
            "Consider thread-safe collections for concurrency",
            "Leverage Stream API for operations",
        ],
    },
    Lesson {
        id: "exceptions",
        title: "Exception Handling",
        description: "Exception handling allows you to gracefully handle errors and unexpected situations. Critical for building robust backend applications that don't crash.",
        importance: "Why It Matters",
        points: &[
            "Prevent application crashes",
            "Provide meaningful error messages",
            "Handle database failures",
            "Manage API errors gracefully",
        ],
        code_sample: r#"// Try-Catch
try {
    User user = userService.findById(id);
    processUser(user);
} catch (UserNotFoundException e) {
    logger.error("User not found: " + id);
    throw new ResponseStatusException(
        HttpStatus.NOT_FOUND, "User not found"
    );
} catch (Exception e) {
    logger.error("Unexpected error", e);
    throw new InternalServerException();
} finally {
    // Cleanup code
    closeResources();
}

// Custom Exceptions
public class UserNotFoundException extends RuntimeException {
    public UserNotFoundException(int id) {
        super("User not found with id: " + id);
    }
}

// Global Exception Handler
@ControllerAdvice
public class GlobalExceptionHandler {

    @ExceptionHandler(UserNotFoundException.class)
    public ResponseEntity<ErrorResponse> handleUserNotFound(
        UserNotFoundException ex
    ) {
        ErrorResponse error = new ErrorResponse(
            HttpStatus.NOT_FOUND.value(),
            ex.getMessage()
        );
        return new ResponseEntity<>(error, HttpStatus.NOT_FOUND);
    }
}"#,
        tips: &[
            "Catch specific exceptions first",
            "Don't catch Exception unless necessary",
            "Always log exceptions",
            "Use custom exceptions for business logic",
        ],
    },
    Lesson {
        id: "java8",
        title: "Java 8 Features",
        description: "Java 8 introduced powerful features like Lambda expressions and Stream API that make code more concise and functional. These are widely used in modern backend development.",
        importance: "Why Learn Java 8",
        points: &[
            "Write cleaner, more readable code",
            "Process collections efficiently",
            "Enable functional programming style",
            "Required by modern frameworks",
        ],
        code_sample: r#"// Lambda Expressions
// Before Java 8
List<User> activeUsers = new ArrayList<>();
for (User user : users) {
    if (user.isActive()) {
        activeUsers.add(user);
    }
}

// With Lambda
List<User> activeUsers = users.stream()
    .filter(user -> user.isActive())
    .collect(Collectors.toList());

// Stream Operations
users.stream()
    .filter(u -> u.getAge() >= 18)
    .map(User::getName)
    .sorted()
    .forEach(System.out::println);

// Method References
users.forEach(System.out::println);
List<String> names = users.stream()
    .map(User::getName)
    .collect(Collectors.toList());

// Optional
Optional<User> userOpt = userRepository.findById(id);
User user = userOpt.orElse(defaultUser);
String name = userOpt.map(User::getName).orElse("Unknown");

// Collectors
Map<Boolean, List<User>> partitioned = users.stream()
    .collect(Collectors.partitioningBy(User::isActive));

List<String> names = users.stream()
    .map(User::getName)
    .collect(Collectors.joining(", "));"#,
        tips: &[
            "Use Stream API for collection operations",
            "Prefer method references when possible",
            "Use Optional to avoid null checks",
            "Learn common collectors",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_topics_resolve() {
        for id in [
            "variables",
            "control",
            "methods",
            "arrays",
            "strings",
            "oop",
            "interfaces",
            "abstract",
            "collections",
            "exceptions",
            "java8",
        ] {
            assert!(lesson(id).is_some(), "missing topic {id}");
        }
    }

    #[test]
    fn unknown_topic_is_none() {
        assert!(lesson("nonexistent").is_none());
        assert!(lesson("").is_none());
        assert!(lesson("VARIABLES").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = lessons().iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), lessons().len());
    }

    #[test]
    fn every_lesson_is_fully_populated() {
        for lesson in lessons() {
            assert!(!lesson.title.is_empty(), "{}: empty title", lesson.id);
            assert!(
                !lesson.description.is_empty(),
                "{}: empty description",
                lesson.id
            );
            assert!(!lesson.importance.is_empty());
            assert!(!lesson.points.is_empty(), "{}: no points", lesson.id);
            assert!(!lesson.code_sample.is_empty());
            assert!(!lesson.tips.is_empty(), "{}: no tips", lesson.id);
        }
    }

    #[test]
    fn search_text_covers_title_and_description() {
        let l = lesson("variables").unwrap();
        let text = l.search_text();
        assert!(text.contains("Variables & Data Types"));
        assert!(text.contains("containers that store data values"));
    }
}
