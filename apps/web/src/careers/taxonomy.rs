//! Static two-level career taxonomy: domain → roles, plus the role page table.
//!
//! Role pages are looked up by identifier in `ROLES`; request paths are never
//! turned into template paths.

/// Title shown for a domain identifier that is not in `DOMAINS`.
pub const UNKNOWN_DOMAIN_TITLE: &str = "Unknown Domain";

#[derive(Debug)]
pub struct Domain {
    pub id: &'static str,
    pub title: &'static str,
    pub roles: &'static [&'static str],
}

#[derive(Debug)]
pub struct RoleProfile {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub key_skills: &'static [&'static str],
    pub path: &'static str,
}

pub const DOMAINS: &[Domain] = &[
    Domain {
        id: "software",
        title: "Software",
        roles: &["fullstack", "datascientist", "backend", "frontend", "devops"],
    },
    Domain {
        id: "civil",
        title: "Civils",
        roles: &["ias", "ips", "group-i", "ifs"],
    },
    Domain {
        id: "banking",
        title: "Banking",
        roles: &["po", "clerk", "so"],
    },
    Domain {
        id: "medical",
        title: "Medical",
        roles: &["nurse", "doctor", "surgeon", "pharmacist"],
    },
    Domain {
        id: "agriculture",
        title: "Agriculture",
        roles: &["agriculture-officer", "scientist", "researcher"],
    },
    Domain {
        id: "govt",
        title: "Government Exams",
        roles: &["ssc", "rrb", "psu"],
    },
];

pub const ROLES: &[RoleProfile] = &[
    // software
    RoleProfile {
        id: "fullstack",
        title: "Full Stack Developer",
        summary: "Builds both the browser-facing interface and the server-side services behind it.",
        key_skills: &["JavaScript", "React", "HTML/CSS", "SQL", "REST APIs", "Git"],
        path: "Degree or bootcamp in computer science, a portfolio of deployed projects, then junior web developer roles.",
    },
    RoleProfile {
        id: "datascientist",
        title: "Data Scientist",
        summary: "Turns raw data into models and insights that drive business decisions.",
        key_skills: &["Python", "Pandas", "NumPy", "Statistics", "Machine Learning", "SQL"],
        path: "Degree in a quantitative field, hands-on analysis projects, then analyst or junior data scientist roles.",
    },
    RoleProfile {
        id: "backend",
        title: "Backend Developer",
        summary: "Designs and runs the services, databases and APIs that applications depend on.",
        key_skills: &["Java", "Python", "Django", "SQL", "Docker", "Linux"],
        path: "Computer science fundamentals, one server-side framework in depth, then backend internships.",
    },
    RoleProfile {
        id: "frontend",
        title: "Frontend Developer",
        summary: "Builds accessible, responsive user interfaces for the web.",
        key_skills: &["HTML", "CSS", "JavaScript", "React", "Accessibility"],
        path: "Strong HTML/CSS/JavaScript, a component framework, and a portfolio of interfaces.",
    },
    RoleProfile {
        id: "devops",
        title: "DevOps Engineer",
        summary: "Automates builds, deployments and infrastructure so teams can ship reliably.",
        key_skills: &["Linux", "Git", "Docker", "Kubernetes", "CI/CD", "Cloud platforms"],
        path: "System administration or development experience, then cloud and container certifications.",
    },
    // civil services
    RoleProfile {
        id: "ias",
        title: "Indian Administrative Service (IAS)",
        summary: "Senior administrative officers who implement government policy at district, state and national level.",
        key_skills: &["General Studies", "Essay writing", "Optional subject", "Ethics", "Current affairs"],
        path: "Graduate degree, then the UPSC Civil Services Examination: prelims, mains and interview.",
    },
    RoleProfile {
        id: "ips",
        title: "Indian Police Service (IPS)",
        summary: "Officers who lead state and central police forces.",
        key_skills: &["General Studies", "Law and order", "Leadership", "Physical fitness"],
        path: "UPSC Civil Services Examination, physical standards, then training at the national police academy.",
    },
    RoleProfile {
        id: "group-i",
        title: "State Group-I Services",
        summary: "Gazetted state government posts such as deputy collector and deputy superintendent of police.",
        key_skills: &["State history and geography", "General Studies", "Current affairs"],
        path: "Graduate degree, then the state public service commission Group-I examination.",
    },
    RoleProfile {
        id: "ifs",
        title: "Indian Foreign Service (IFS)",
        summary: "Diplomats who represent the country abroad and shape foreign policy.",
        key_skills: &["International relations", "Languages", "Negotiation", "General Studies"],
        path: "UPSC Civil Services Examination with a high rank, then foreign service training.",
    },
    // banking
    RoleProfile {
        id: "po",
        title: "Probationary Officer",
        summary: "Entry-level bank managers trained across branch operations, credit and customer service.",
        key_skills: &["Quantitative aptitude", "Reasoning", "English", "Banking awareness"],
        path: "Graduate degree, then IBPS or SBI PO examinations: prelims, mains and interview.",
    },
    RoleProfile {
        id: "clerk",
        title: "Bank Clerk",
        summary: "Front-desk banking staff handling deposits, withdrawals and customer queries.",
        key_skills: &["Numerical ability", "Reasoning", "English", "Computer basics"],
        path: "Graduate degree, then IBPS or SBI clerk examinations.",
    },
    RoleProfile {
        id: "so",
        title: "Specialist Officer",
        summary: "Bank officers in specialised functions such as IT, law, HR, marketing or agriculture.",
        key_skills: &["Domain expertise", "Reasoning", "English", "Professional knowledge"],
        path: "Degree in the specialist field, then the IBPS SO examination.",
    },
    // medical
    RoleProfile {
        id: "nurse",
        title: "Nurse",
        summary: "Provides patient care, administers treatment and supports doctors in clinical settings.",
        key_skills: &["Patient care", "Clinical procedures", "Communication", "Empathy"],
        path: "GNM or B.Sc Nursing, registration with the nursing council, then hospital placement.",
    },
    RoleProfile {
        id: "doctor",
        title: "Doctor",
        summary: "Diagnoses and treats illness across general practice or a chosen specialty.",
        key_skills: &["Biology", "Diagnosis", "Clinical reasoning", "Communication"],
        path: "NEET, MBBS with internship, then optional postgraduate specialisation.",
    },
    RoleProfile {
        id: "surgeon",
        title: "Surgeon",
        summary: "Performs operative procedures to treat injury and disease.",
        key_skills: &["Anatomy", "Surgical technique", "Decision making under pressure"],
        path: "MBBS, then MS in surgery and optional super-specialty training.",
    },
    RoleProfile {
        id: "pharmacist",
        title: "Pharmacist",
        summary: "Dispenses medication and advises patients and clinicians on safe drug use.",
        key_skills: &["Pharmacology", "Chemistry", "Attention to detail", "Patient counselling"],
        path: "D.Pharm or B.Pharm, registration with the pharmacy council.",
    },
    // agriculture
    RoleProfile {
        id: "agriculture-officer",
        title: "Agriculture Officer",
        summary: "Runs government agricultural schemes and advises farmers at block and district level.",
        key_skills: &["Agronomy", "Soil science", "Extension work", "Government schemes"],
        path: "B.Sc Agriculture, then state agriculture department or bank AFO examinations.",
    },
    RoleProfile {
        id: "scientist",
        title: "Agricultural Scientist",
        summary: "Develops better crop varieties, farming practices and pest management.",
        key_skills: &["Plant breeding", "Genetics", "Field trials", "Data analysis"],
        path: "M.Sc or PhD in agricultural sciences, then the ASRB/ICAR recruitment examination.",
    },
    RoleProfile {
        id: "researcher",
        title: "Agricultural Researcher",
        summary: "Studies soils, crops and climate to support sustainable agriculture.",
        key_skills: &["Research methods", "Statistics", "Scientific writing", "Lab work"],
        path: "Postgraduate research degree and fellowships such as ICAR JRF/SRF.",
    },
    // government exams
    RoleProfile {
        id: "ssc",
        title: "Staff Selection Commission (SSC)",
        summary: "Recruits staff for central government ministries and departments.",
        key_skills: &["Quantitative aptitude", "Reasoning", "English", "General awareness"],
        path: "Qualification depends on the exam: CGL for graduates, CHSL for higher secondary.",
    },
    RoleProfile {
        id: "rrb",
        title: "Railway Recruitment Board (RRB)",
        summary: "Recruits technical and non-technical staff for the railways.",
        key_skills: &["Mathematics", "Reasoning", "General science", "General awareness"],
        path: "RRB NTPC, Group D or JE examinations depending on qualification.",
    },
    RoleProfile {
        id: "psu",
        title: "Public Sector Undertakings (PSU)",
        summary: "Engineering and management roles in government-owned companies.",
        key_skills: &["Engineering fundamentals", "Technical aptitude", "GATE preparation"],
        path: "Engineering degree, then recruitment through GATE scores or PSU-specific exams.",
    },
];

pub fn find_domain(id: &str) -> Option<&'static Domain> {
    DOMAINS.iter().find(|d| d.id == id)
}

/// Role page for `role_id`, only if the role belongs to `domain_id`.
pub fn find_role(domain_id: &str, role_id: &str) -> Option<&'static RoleProfile> {
    let domain = find_domain(domain_id)?;
    if !domain.roles.contains(&role_id) {
        return None;
    }
    ROLES.iter().find(|r| r.id == role_id)
}
