//! Fixed company FAQ records used to seed the catalogue.

/// `(category, question, answer, keywords)`
pub type FaqSeed = (&'static str, &'static str, &'static str, &'static str);

pub const FAQ_SEED: &[FaqSeed] = &[
    // HR
    (
        "HR",
        "How many vacation days am I entitled to?",
        "Every employee is entitled to 25 vacation days per year. After 5 years with the company the entitlement rises to 27 days. Vacation must be approved by your manager at least 14 days in advance.",
        "vacation, leave, entitlement, days, time off",
    ),
    (
        "HR",
        "How do I request home office?",
        "Request home office through the internal HRIS system under 'Requests'. Your direct manager must approve it. At most 3 days per week; Monday and Wednesday are mandatory office days.",
        "home office, working from home, remote, remote work",
    ),
    (
        "HR",
        "How long is the probation period?",
        "The probation period is 3 months for regular positions and 6 months for management positions. During probation employment can be terminated without stating a reason, with a 15-day notice period.",
        "probation, onboarding, new employee, notice period",
    ),
    (
        "HR",
        "How do sick days work?",
        "Employees are entitled to 5 sick days per year. No medical certificate is required. Report a sick day to your manager by 9:00 that day by phone or on Slack.",
        "sick day, illness, sick leave, health, absence",
    ),
    (
        "HR",
        "What benefits does the company offer?",
        "The company offers a Multisport card (50% contribution), meal vouchers of 150 CZK per day, a pension savings contribution of 1000 CZK per month, free language courses, and an annual bonus of up to 15% of salary based on performance review.",
        "benefits, perks, meal vouchers, multisport, pension, bonus",
    ),
    // IT
    (
        "IT",
        "How do I reset my password for the company system?",
        "Go to portal.firma.cz/reset, enter your company email and click 'Reset password'. The new password arrives by email within 5 minutes. If the problem persists, contact the IT helpdesk on extension 555.",
        "password, reset, sign in, login, forgotten password, portal",
    ),
    (
        "IT",
        "How do I connect to the company VPN?",
        "Download the FortiClient application from the intranet (intranet.firma.cz/vpn). Use server vpn.firma.cz, port 443. Credentials are the same as for the company system. If you run into problems, call the IT helpdesk on 555.",
        "VPN, connection, remote access, FortiClient, network",
    ),
    (
        "IT",
        "How do I order new hardware?",
        "File hardware requests (laptop, monitor, keyboard and so on) in the JIRA project 'IT-PROCUREMENT'. Approval takes 3-5 business days. Laptops are replaced every 3 years as standard.",
        "hardware, laptop, computer, monitor, order, replacement",
    ),
    (
        "IT",
        "What software may I install on a company computer?",
        "Approved software is listed on the intranet under 'IT Policies'. Installing unauthorised software is forbidden. For exceptions, submit a justified request through the IT helpdesk.",
        "software, installation, program, license, approved",
    ),
    // Finance
    (
        "Finance",
        "When is payday?",
        "Salary is paid on the 10th of every month. If the 10th falls on a weekend or public holiday, payment is made on the last business day before that date. Payslips are available in the HRIS system.",
        "payday, salary, wages, date, money, payslip",
    ),
    (
        "Finance",
        "How do I get travel expenses reimbursed?",
        "Fill in the travel order in SAP within 5 business days of your return. Attach receipts and tickets. Per diems are calculated automatically according to law. Reimbursement is paid with the next salary.",
        "travel expenses, per diem, travel order, receipts, business trip",
    ),
    (
        "Finance",
        "How does the company credit card work?",
        "A company card can be requested for senior-level positions and above. The monthly limit is 30 000 CZK. Receipts must be uploaded to SAP within 3 days of the transaction. Personal use is forbidden.",
        "credit card, company card, payment, limit, SAP",
    ),
    // General
    (
        "General",
        "What are the working hours?",
        "Working hours are flexible with a mandatory core of 9:00-15:00. The total is 8 hours per day, 40 hours per week. Overtime above 150 hours per year must be approved by the division director.",
        "working hours, hours, overtime, core time, flexible",
    ),
    (
        "General",
        "Where can I find company documents and templates?",
        "All company documents, templates and guidelines are on SharePoint: sharepoint.firma.cz/dokumenty. Access is granted automatically once you sign in with your company account.",
        "documents, templates, guidelines, SharePoint, forms",
    ),
    (
        "General",
        "How do I report a security incident?",
        "Report security incidents immediately to security@firma.cz or on line 911. For IT incidents (phishing, malware) contact the SOC team through the Slack channel #security-incidents.",
        "security, incident, reporting, phishing, malware",
    ),
];
