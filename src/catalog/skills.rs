//! Built-in skill vocabulary, grouped by category. Entry order is
//! significant: extraction reports skills in the order they appear here,
//! and the first synonym of a display name decides its level.

type Entry = (&'static str, &'static str);

pub(crate) fn builtin_skills() -> Vec<Entry> {
    let mut entries = Vec::new();
    entries.extend_from_slice(languages());
    entries.extend_from_slice(dotnet_stack());
    entries.extend_from_slice(jvm_stack());
    entries.extend_from_slice(python_stack());
    entries.extend_from_slice(web_stack());
    entries.extend_from_slice(databases());
    entries.extend_from_slice(cloud_and_devops());
    entries.extend_from_slice(testing_tools());
    entries.extend_from_slice(architecture_and_practices());
    entries.extend_from_slice(version_control());
    entries.extend_from_slice(mobile());
    entries
}

fn languages() -> &'static [Entry] {
    &[
        ("java", "Java"),
        ("javascript", "JavaScript"),
        ("typescript", "TypeScript"),
        ("python", "Python"),
        ("c#", "C#"),
        ("c++", "C++"),
        ("golang", "Go"),
        (" go ", "Go"),
        ("rust", "Rust"),
        ("kotlin", "Kotlin"),
        ("swift", "Swift"),
        ("php", "PHP"),
        ("ruby", "Ruby"),
        ("scala", "Scala"),
        ("r programming", "R"),
        ("perl", "Perl"),
        ("dart", "Dart"),
        ("elixir", "Elixir"),
        ("clojure", "Clojure"),
        ("haskell", "Haskell"),
    ]
}

fn dotnet_stack() -> &'static [Entry] {
    &[
        (".net", ".NET"),
        ("asp.net", "ASP.NET"),
        (".net core", ".NET Core"),
        (".net framework", ".NET Framework"),
        ("blazor", "Blazor"),
        ("wpf", "WPF"),
        ("xamarin", "Xamarin"),
        ("entity framework", "Entity Framework"),
    ]
}

fn jvm_stack() -> &'static [Entry] {
    &[
        ("spring boot", "Spring Boot"),
        ("spring", "Spring"),
        ("hibernate", "Hibernate"),
        ("maven", "Maven"),
        ("gradle", "Gradle"),
        ("jakarta", "Jakarta EE"),
        ("jpa", "JPA"),
        ("junit", "JUnit"),
        ("micronaut", "Micronaut"),
        ("quarkus", "Quarkus"),
    ]
}

fn python_stack() -> &'static [Entry] {
    &[
        ("django", "Django"),
        ("flask", "Flask"),
        ("fastapi", "FastAPI"),
        ("sqlalchemy", "SQLAlchemy"),
        ("pandas", "Pandas"),
        ("numpy", "NumPy"),
        ("scikit-learn", "scikit-learn"),
        ("tensorflow", "TensorFlow"),
        ("pytorch", "PyTorch"),
        ("celery", "Celery"),
    ]
}

fn web_stack() -> &'static [Entry] {
    &[
        ("react", "React"),
        ("angular", "Angular"),
        ("vue", "Vue.js"),
        ("vue.js", "Vue.js"),
        ("next.js", "Next.js"),
        ("nuxt", "Nuxt.js"),
        ("svelte", "Svelte"),
        ("redux", "Redux"),
        ("webpack", "Webpack"),
        ("vite", "Vite"),
        ("node.js", "Node.js"),
        ("nodejs", "Node.js"),
        ("express", "Express.js"),
        ("nestjs", "NestJS"),
        ("graphql", "GraphQL"),
        ("jquery", "jQuery"),
    ]
}

fn databases() -> &'static [Entry] {
    &[
        ("postgresql", "PostgreSQL"),
        ("mysql", "MySQL"),
        ("mongodb", "MongoDB"),
        ("redis", "Redis"),
        ("elasticsearch", "Elasticsearch"),
        ("cassandra", "Cassandra"),
        ("oracle", "Oracle DB"),
        ("mssql", "MS SQL Server"),
        ("sql server", "MS SQL Server"),
        ("sqlite", "SQLite"),
        ("dynamodb", "DynamoDB"),
        ("neo4j", "Neo4j"),
        ("mariadb", "MariaDB"),
    ]
}

fn cloud_and_devops() -> &'static [Entry] {
    &[
        ("aws", "AWS"),
        ("azure", "Azure"),
        ("google cloud", "Google Cloud"),
        ("gcp", "Google Cloud"),
        ("docker", "Docker"),
        ("kubernetes", "Kubernetes"),
        ("terraform", "Terraform"),
        ("ansible", "Ansible"),
        ("jenkins", "Jenkins"),
        ("gitlab ci", "GitLab CI"),
        ("github actions", "GitHub Actions"),
        ("ci/cd", "CI/CD"),
        ("helm", "Helm"),
        ("nginx", "Nginx"),
        ("apache", "Apache"),
    ]
}

fn testing_tools() -> &'static [Entry] {
    &[
        ("jest", "Jest"),
        ("mocha", "Mocha"),
        ("cypress", "Cypress"),
        ("selenium", "Selenium"),
        ("pytest", "pytest"),
        ("testng", "TestNG"),
        ("tdd", "TDD"),
        ("bdd", "BDD"),
    ]
}

fn architecture_and_practices() -> &'static [Entry] {
    &[
        ("microservices", "Microservices"),
        ("rest api", "REST API"),
        ("restful", "RESTful"),
        ("soap", "SOAP"),
        ("message queue", "Message Queue"),
        ("rabbitmq", "RabbitMQ"),
        ("kafka", "Apache Kafka"),
        ("grpc", "gRPC"),
        ("oauth", "OAuth"),
        ("jwt", "JWT"),
        ("solid", "SOLID Principles"),
        ("design patterns", "Design Patterns"),
        ("agile", "Agile"),
        ("scrum", "Scrum"),
    ]
}

fn version_control() -> &'static [Entry] {
    &[
        ("git", "Git"),
        ("github", "GitHub"),
        ("gitlab", "GitLab"),
        ("bitbucket", "Bitbucket"),
    ]
}

fn mobile() -> &'static [Entry] {
    &[
        ("android", "Android"),
        ("ios", "iOS"),
        ("react native", "React Native"),
        ("flutter", "Flutter"),
    ]
}
