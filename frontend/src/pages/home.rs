use yew::prelude::*;

use crate::components::header::Header;
use crate::controller::PageInteractionController;

struct Article {
    title: &'static str,
    summary: &'static str,
    image: &'static str,
}

const ARTICLES: [Article; 6] = [
    Article { title: "Designing for Calm", summary: "Why fewer moving parts make a page easier to read.", image: "/assets/articles/cat-01.jpg" },
    Article { title: "Type That Breathes", summary: "Line length, rhythm and the space between paragraphs.", image: "/assets/articles/cat-02.jpg" },
    Article { title: "Color on a Budget", summary: "Building a palette from two base hues.", image: "/assets/articles/cat-03.jpg" },
    Article { title: "Motion With Purpose", summary: "Entrance animations that guide instead of distract.", image: "/assets/articles/cat-04.jpg" },
    Article { title: "Grids in Practice", summary: "Responsive layouts without a framework.", image: "/assets/articles/cat-05.jpg" },
    Article { title: "Shipping Static", summary: "A small site, served fast, maintained easily.", image: "/assets/articles/cat-06.jpg" },
];

const GALLERY: [&str; 6] = [
    "/assets/gallery/01.png",
    "/assets/gallery/02.png",
    "/assets/gallery/03.jpg",
    "/assets/gallery/04.png",
    "/assets/gallery/05.jpg",
    "/assets/gallery/06.png",
];

const FEATURES: [(&str, &str, &str); 3] = [
    ("quality", "Quality", "Every detail reviewed before it reaches you."),
    ("time", "Time", "Delivered on the schedule we agree on."),
    ("passion", "Passion", "We only take on work we care about."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Mohamed Farag", "Full Stack Developer", "Clear process, quick feedback and a result that shipped on time."),
    ("Mohamed Ibrahim", "Full Stack Developer", "They turned a rough idea into a page our customers actually read."),
    ("Shady Nabil", "Full Stack Developer", "Friendly, precise, and easy to work with from start to finish."),
];

const TEAM: [(&str, &str); 4] = [
    ("Osama Mohamed", "Design lead"),
    ("Amira Hassan", "Frontend engineer"),
    ("Karim Adel", "Content strategist"),
    ("Nour Samir", "Project manager"),
];

const SERVICES: [(&str, &str); 6] = [
    ("user-shield", "Security"),
    ("tools", "Fixing Issues"),
    ("map-location", "Location"),
    ("laptop-code", "Coding"),
    ("palette", "Design"),
    ("bullhorn", "Marketing"),
];

const SKILLS: [(&str, u32); 4] = [("HTML", 80), ("CSS", 85), ("JavaScript", 70), ("Rust", 75)];

const STEPS: [(&str, &str); 3] = [
    ("Business Analysis", "We learn what the page has to achieve."),
    ("Architecture", "Structure, content and flow get agreed up front."),
    ("Developement", "Built, reviewed and launched."),
];

const PLANS: [(&str, u32, [&str; 3]); 3] = [
    ("Basic", 15, ["10GB HDD Space", "5 Email Addresses", "2 Subdomains"]),
    ("Advanced", 25, ["20GB HDD Space", "10 Email Addresses", "5 Subdomains"]),
    ("Professional", 45, ["50GB HDD Space", "20 Email Addresses", "10 Subdomains"]),
];

const VIDEOS: [(&str, &str); 6] = [
    ("How To Create Sub Domain", "05:18"),
    ("Playing With The DNS", "03:18"),
    ("Everything About The Virtual Hosts", "05:25"),
    ("How To Monitor Your Website", "04:16"),
    ("Uncharted Beating The Last Boss", "10:12"),
    ("Ys Oath In Felghana Overview", "06:32"),
];

const STATS: [(&str, &str, &str); 4] = [
    ("users", "150", "Clients"),
    ("code", "1,234", "Projects"),
    ("globe-asia", "500K", "Countries"),
    ("money-bill", "12K", "Money"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Attach the scroll animations once the sections exist in the DOM.
    use_effect_with_deps(
        move |_| {
            let controller = PageInteractionController::attach()
                .map_err(|err| log::warn!("page interactions unavailable: {}", err))
                .ok();
            move || drop(controller)
        },
        (),
    );

    html! {
        <>
            <Header />

            <div class="landing">
                <div class="container">
                    <div class="text">
                        <h1>{"Welcome, To Lumen Studio"}</h1>
                        <p>{"Quiet, fast pages for small teams with something to say."}</p>
                    </div>
                    <div class="image">
                        <img src="/assets/landing-image.png" alt="" />
                    </div>
                </div>
            </div>

            <div class="articles" id="articles">
                <h2 class="main-title">{"Articles"}</h2>
                <div class="container">
                    {
                        for ARTICLES.iter().map(|article| html! {
                            <div class="box">
                                <img src={article.image} alt="" />
                                <div class="content">
                                    <h3>{article.title}</h3>
                                    <p>{article.summary}</p>
                                </div>
                                <div class="info">
                                    <a href="#">{"Read More"}</a>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="gallery" id="gallery">
                <h2 class="main-title">{"Gallery"}</h2>
                <div class="container">
                    {
                        for GALLERY.iter().map(|src| html! {
                            <div class="box">
                                <div class="image">
                                    <img src={*src} alt="" />
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="features" id="features">
                <h2 class="main-title">{"Features"}</h2>
                <div class="container">
                    {
                        for FEATURES.iter().map(|(kind, title, text)| html! {
                            <div class={classes!("box", *kind)}>
                                <div class="img-holder">
                                    <img src={format!("/assets/features/{}.jpg", kind)} alt="" />
                                </div>
                                <h2>{*title}</h2>
                                <p>{*text}</p>
                                <a href="#">{"More"}</a>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="testimonials" id="testimonials">
                <h2 class="main-title">{"Testimonials"}</h2>
                <div class="container">
                    {
                        for TESTIMONIALS.iter().map(|(name, role, quote)| html! {
                            <div class="box">
                                <h3>{*name}</h3>
                                <span class="title">{*role}</span>
                                <p>{*quote}</p>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="team" id="team">
                <h2 class="main-title">{"Team Members"}</h2>
                <div class="container">
                    {
                        for TEAM.iter().enumerate().map(|(i, (name, role))| html! {
                            <div class="box">
                                <div class="data">
                                    <img src={format!("/assets/team/team-0{}.jpg", i + 1)} alt="" />
                                </div>
                                <div class="info">
                                    <h3>{*name}</h3>
                                    <p>{*role}</p>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="services" id="services">
                <h2 class="main-title">{"Services"}</h2>
                <div class="container">
                    {
                        for SERVICES.iter().enumerate().map(|(i, (icon, title))| html! {
                            <div class="box">
                                <i class={format!("fa-solid fa-{} fa-4x", icon)}></i>
                                <h3>{*title}</h3>
                                <div class="info">
                                    <span>{format!("{:02}", i + 1)}</span>
                                    <a href="#">{"Details"}</a>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="skills" id="our-skills">
                <h2 class="main-title">{"Our Skills"}</h2>
                <div class="container">
                    <img src="/assets/skills.png" alt="" />
                    <div class="progress">
                        {
                            for SKILLS.iter().map(|(name, pct)| html! {
                                <div class="prog-holder">
                                    <h4>{*name}</h4>
                                    <div class="prog">
                                        <span style={format!("width: {}%", pct)}></span>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>

            <div class="work-steps" id="work-steps">
                <h2 class="main-title">{"How It Works ?"}</h2>
                <div class="container">
                    <img src="/assets/work-steps.png" class="image" alt="" />
                    <div class="info">
                        {
                            for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                                <div class="box">
                                    <img src={format!("/assets/work-steps-{}.png", i + 1)} alt="" />
                                    <div class="text">
                                        <h3>{*title}</h3>
                                        <p>{*text}</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>

            <div class="events" id="events">
                <h2 class="main-title">{"Latest Events"}</h2>
                <div class="container">
                    <img src="/assets/events.png" alt="" />
                    <div class="info">
                        <div class="time">
                            <div class="unit"><span>{"15"}</span><span>{"Days"}</span></div>
                            <div class="unit"><span>{"08"}</span><span>{"Hours"}</span></div>
                            <div class="unit"><span>{"45"}</span><span>{"Minutes"}</span></div>
                            <div class="unit"><span>{"55"}</span><span>{"Seconds"}</span></div>
                        </div>
                        <h2 class="title">{"Tech Masters Event 2026"}</h2>
                        <p class="description">{"A day of talks on building small, fast, accessible sites."}</p>
                    </div>
                </div>
            </div>

            <div class="pricing" id="pricing">
                <h2 class="main-title">{"Pricing Plans"}</h2>
                <div class="container">
                    {
                        for PLANS.iter().map(|(name, price, perks)| html! {
                            <div class="box">
                                <div class="title">{*name}</div>
                                <div class="price">
                                    <span class="amount">{format!("${}", price)}</span>
                                    <span class="time">{"Per Month"}</span>
                                </div>
                                <ul>
                                    { for perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
                                </ul>
                                <a href="#">{"Choose Plan"}</a>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="videos" id="videos">
                <h2 class="main-title">{"Top Videos"}</h2>
                <div class="container">
                    <div class="holder">
                        <div class="list">
                            <div class="name">{"Top Videos"}</div>
                            <ul>
                                {
                                    for VIDEOS.iter().map(|(title, length)| html! {
                                        <li>{*title}<span>{*length}</span></li>
                                    })
                                }
                            </ul>
                        </div>
                        <div class="preview">
                            <img src="/assets/video-preview.avif" alt="" />
                            <div class="info">{VIDEOS[0].0}</div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="stats" id="stats">
                <h2>{"Our Awesome Stats"}</h2>
                <div class="container">
                    {
                        for STATS.iter().map(|(icon, number, label)| html! {
                            <div class="box">
                                <i class={format!("fa-solid fa-{} fa-2x fa-fw", icon)}></i>
                                <span class="number">{*number}</span>
                                <span class="text">{*label}</span>
                            </div>
                        })
                    }
                </div>
            </div>

            <div class="footer" id="footer">
                <div class="container">
                    <div class="box">
                        <h3>{"Lumen Studio"}</h3>
                        <p class="text">{"Small studio, careful work."}</p>
                    </div>
                </div>
                <p class="copyright">{"Made With <3 By Lumen Studio"}</p>
            </div>
        </>
    }
}
