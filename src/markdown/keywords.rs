//! Terms emphasized wherever they appear in prose.
//!
//! Order matters: at any position the first matching entry wins, so a
//! specific term (`Node.js`) must precede a generic one it starts with
//! (`Node`).

pub const KEYWORDS: &[&str] = &[
    // Languages / platforms
    "JavaScript",
    "TypeScript",
    "Python",
    "PHP",
    "Ruby",
    "Go",
    "Swift",
    "Kotlin",
    "Node.js",
    "Node",
    "Deno",
    "Bun",
    "Java",
    // Frontend frameworks and tooling
    "React",
    "Vue",
    "Next.js",
    "Nuxt",
    "Vite",
    "Webpack",
    "Babel",
    // Backend frameworks
    "Laravel",
    "Symfony",
    "Express",
    "Serverless",
    // Web / CSS
    "CSS",
    "HTML",
    "SQL",
    "Twig",
    "Responsive",
    "Breakpoints",
    // DevOps / systems
    "Docker",
    "Linux",
    "Homebrew",
    "Brew",
    "Shell",
    "Bash",
    "Zsh",
    "Git",
    "Gitignore",
    // WordPress / Bedrock
    "WordPress",
    "Bedrock",
    "wpackagist",
    // Security / network
    "Cybersecurity",
    "Network",
    "Permissions",
    // Misc
    "Mac",
    "Apple",
    "Raspberry",
    "Package",
    "NPM",
    "Yarn",
    "npm",
    "yarn",
    "Composer",
    "composer",
];
