//! Privacy policy and terms of service copy.

pub const LAST_UPDATED: &str = "July 1, 2023";

pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

const fn section(
    heading: &'static str,
    paragraphs: &'static [&'static str],
    bullets: &'static [&'static str],
) -> LegalSection {
    LegalSection { heading, paragraphs, bullets }
}

pub const PRIVACY_SECTIONS: &[LegalSection] = &[
    section(
        "Our Commitment to Privacy",
        &["At Bhardwaj Architect, we are committed to protecting your privacy and ensuring the security of your personal information. This policy outlines how we collect, use, and disclose your information when you use our services."],
        &[],
    ),
    section(
        "Information We Collect",
        &["We may collect personal information you provide to us and technical information gathered when you visit the site."],
        &[
            "Name, email address, phone number, and mailing address",
            "Information provided in project briefs or consultations",
            "Communication records with our team",
            "IP address, browser and device information",
            "Cookies and usage data",
        ],
    ),
    section(
        "How We Use Your Information",
        &["We use the collected information for purposes including:"],
        &[
            "Providing and maintaining our services",
            "Responding to inquiries and requests",
            "Sending project updates and communications",
            "Improving our website and services",
            "Marketing and promotional activities (with consent)",
            "Compliance with legal obligations",
        ],
    ),
    section(
        "Information Sharing and Disclosure",
        &["We do not sell your personal information. We share it only with service providers who help us operate our business, when required by law, or with your consent."],
        &[],
    ),
    section(
        "Data Security",
        &["We implement appropriate technical and organizational measures to protect your information. No method of transmission over the internet is completely secure, and we cannot guarantee absolute security."],
        &[],
    ),
    section(
        "Your Rights",
        &["Depending on your location, you may have the right to access, correct, or delete your personal information, and to object to or restrict certain processing."],
        &[],
    ),
    section(
        "Cookies and Tracking Technologies",
        &["Our site stores a single preference for light or dark display mode in your browser. You can clear it at any time through your browser settings."],
        &[],
    ),
    section(
        "Children's Privacy",
        &["Our services are not directed to children under 13, and we do not knowingly collect personal information from them."],
        &[],
    ),
    section(
        "Changes to This Privacy Policy",
        &["We may update this policy from time to time. Changes are posted on this page with a revised date."],
        &[],
    ),
    section(
        "Contact Us",
        &["If you have questions about this policy, contact us at info@bhardwajarchitect.com."],
        &[],
    ),
];

pub const TERMS_SECTIONS: &[LegalSection] = &[
    section("Acceptance of Terms", &["By accessing our website or engaging our services, you agree to be bound by these terms."], &[]),
    section("Services Description", &["Bhardwaj Architect provides architectural design, interior design, urban planning, landscape design, project management, visualization, and consultation services. The scope of each engagement is defined in a separate agreement."], &[]),
    section(
        "Client Responsibilities",
        &["Clients agree to:"],
        &[
            "Provide accurate and complete project information",
            "Make timely decisions and approvals",
            "Obtain necessary permissions for site access",
            "Pay fees according to the agreed schedule",
        ],
    ),
    section("Intellectual Property Rights", &["All designs, drawings, and documents produced by Bhardwaj Architect remain our intellectual property unless otherwise agreed in writing. Clients receive a license to use them for the specific project."], &[]),
    section("Payment Terms", &["Fees, payment schedules, and reimbursable expenses are set out in the project agreement. Late payments may result in suspension of services."], &[]),
    section("Project Changes and Modifications", &["Changes to an agreed scope may affect fees and timelines and must be confirmed in writing."], &[]),
    section("Project Timeline and Delays", &["We make every effort to meet agreed timelines but are not responsible for delays caused by factors beyond our control, including regulatory approvals and client-requested changes."], &[]),
    section("Termination of Services", &["Either party may terminate services with written notice. Fees for work completed up to termination remain payable."], &[]),
    section("Limitation of Liability", &["Our liability is limited to the fees paid for the specific service giving rise to the claim, to the extent permitted by law."], &[]),
    section("Confidentiality", &["Both parties agree to keep confidential information shared during a project private, except where disclosure is required by law."], &[]),
    section("Dispute Resolution", &["Disputes will first be addressed through good-faith negotiation, then mediation, before any formal proceedings."], &[]),
    section("Governing Law", &["These terms are governed by the laws of India."], &[]),
    section("Amendments to Terms", &["We may revise these terms at any time. Continued use of our services constitutes acceptance of the revised terms."], &[]),
    section("Contact Information", &["Questions about these terms can be sent to info@bhardwajarchitect.com."], &[]),
];
