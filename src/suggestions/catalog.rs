//! Curated local candidate lists, most popular first

pub const COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Apple",
    "Amazon",
    "Meta",
    "Netflix",
    "Nvidia",
    "Salesforce",
    "Adobe",
    "Oracle",
    "IBM",
    "Intel",
    "Cisco",
    "Spotify",
    "Airbnb",
    "Uber",
    "Lyft",
    "Stripe",
    "Shopify",
    "Atlassian",
    "Slack",
    "Zoom",
    "Dropbox",
    "Twilio",
    "Square",
    "PayPal",
    "Coinbase",
    "Robinhood",
    "Databricks",
    "Snowflake",
    "Palantir",
    "OpenAI",
    "Anthropic",
    "GitHub",
    "GitLab",
    "Figma",
    "Notion",
    "Canva",
    "Pinterest",
    "Reddit",
    "LinkedIn",
    "Twitter",
    "Snap",
    "TikTok",
    "ByteDance",
    "Samsung",
    "Sony",
    "Tesla",
    "SpaceX",
    "Goldman Sachs",
    "JPMorgan Chase",
    "Morgan Stanley",
    "McKinsey & Company",
    "Boston Consulting Group",
    "Bain & Company",
    "Deloitte",
    "Accenture",
    "PwC",
    "EY",
    "KPMG",
    "Walmart",
    "Target",
    "Nike",
    "Disney",
    "Booking.com",
    "Expedia",
    "DoorDash",
    "Instacart",
    "Cloudflare",
    "Datadog",
    "HubSpot",
    "Workday",
    "ServiceNow",
    "VMware",
    "Red Hat",
];

pub const JOB_ROLES: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Staff Software Engineer",
    "Principal Software Engineer",
    "Software Development Engineer",
    "Frontend Developer",
    "Frontend Engineer",
    "Backend Developer",
    "Backend Engineer",
    "Full Stack Developer",
    "Full Stack Engineer",
    "Mobile Developer",
    "iOS Developer",
    "Android Developer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Cloud Engineer",
    "Platform Engineer",
    "Security Engineer",
    "Data Engineer",
    "Data Scientist",
    "Data Analyst",
    "Machine Learning Engineer",
    "AI Engineer",
    "Research Scientist",
    "QA Engineer",
    "QA Analyst",
    "Quality Assurance Engineer",
    "Test Automation Engineer",
    "Embedded Software Engineer",
    "Game Developer",
    "Solutions Architect",
    "Software Architect",
    "Engineering Manager",
    "Director of Engineering",
    "VP of Engineering",
    "Chief Technology Officer",
    "Technical Program Manager",
    "Product Manager",
    "Senior Product Manager",
    "Project Manager",
    "Program Manager",
    "Product Owner",
    "Scrum Master",
    "UX Designer",
    "UI Designer",
    "UX Researcher",
    "Product Designer",
    "Graphic Designer",
    "Technical Writer",
    "Business Analyst",
    "Business Development Manager",
    "Sales Engineer",
    "Account Executive",
    "Customer Success Manager",
    "Marketing Manager",
    "Digital Marketing Specialist",
    "Content Strategist",
    "Operations Manager",
    "Human Resources Manager",
    "Recruiter",
    "Financial Analyst",
    "Chief Executive Officer",
    "Chief Financial Officer",
    "Chief Operating Officer",
    "Mechanical Engineer",
    "Electrical Engineer",
    "Civil Engineer",
    "Junior Software Engineer",
    "Junior Developer",
];
