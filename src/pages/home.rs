use chrono::Datelike;
use yew::prelude::*;

use crate::behavior::portfolio::Category;
use crate::components::cards::{ServiceCard, TimelineItem};
use crate::components::contact_form::ContactForm;
use crate::components::lazy_image::LazyImage;
use crate::components::portfolio::{Portfolio, Project};
use crate::components::stats::{Stat, StatsCounter};
use crate::components::testimonials::{Testimonial, TestimonialsSlider};

const SERVICES: [(&str, &str, &str); 4] = [
    ("🏗️", "Construcción residencial", "Casas y desarrollos habitacionales llave en mano, del proyecto ejecutivo a la entrega."),
    ("🏢", "Obra comercial", "Locales, oficinas y naves con calendarios de obra que respetan tu apertura."),
    ("🏭", "Proyectos industriales", "Estructuras de acero, cimentaciones especiales y plantas de producción."),
    ("🔨", "Remodelación", "Ampliaciones y renovaciones sin detener la operación de tu espacio."),
];

const PROCESS: [(&str, &str); 4] = [
    ("Diagnóstico", "Visitamos el terreno y entendemos lo que necesitas."),
    ("Proyecto y presupuesto", "Planos, memoria de cálculo y un presupuesto cerrado por partidas."),
    ("Ejecución", "Supervisión diaria y reportes semanales de avance con fotografías."),
    ("Entrega", "Recorrido final, garantías por escrito y acompañamiento postventa."),
];

fn stats() -> Vec<Stat> {
    vec![
        Stat { target: 250, label: "Proyectos entregados" },
        Stat { target: 18, label: "Años de experiencia" },
        Stat { target: 1_200_000, label: "m² construidos" },
        Stat { target: 3_400, label: "Empleos generados" },
    ]
}

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Residencial Las Lomas",
            location: "Querétaro",
            category: Category::Residential,
            image: "/assets/projects/lomas.jpg",
        },
        Project {
            title: "Plaza Norte",
            location: "Monterrey",
            category: Category::Commercial,
            image: "/assets/projects/plaza-norte.jpg",
        },
        Project {
            title: "Nave Logística Bajío",
            location: "León",
            category: Category::Industrial,
            image: "/assets/projects/nave-bajio.jpg",
        },
        Project {
            title: "Casa Jacarandas",
            location: "Guadalajara",
            category: Category::Residential,
            image: "/assets/projects/jacarandas.jpg",
        },
        Project {
            title: "Corporativo Reforma",
            location: "Ciudad de México",
            category: Category::Renovation,
            image: "/assets/projects/reforma.jpg",
        },
        Project {
            title: "Centro de Distribución Sur",
            location: "Puebla",
            category: Category::Industrial,
            image: "/assets/projects/cd-sur.jpg",
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Entregaron la nave dos semanas antes de lo pactado y sin sorpresas en el presupuesto.",
            author: "Ing. Ricardo Salinas",
            role: "Director de operaciones, Grupo Bajío",
        },
        Testimonial {
            quote: "Los reportes semanales nos dieron tranquilidad durante toda la obra de nuestra casa.",
            author: "Mariana Orozco",
            role: "Propietaria, Casa Jacarandas",
        },
        Testimonial {
            quote: "Remodelaron tres pisos de oficinas sin que dejáramos de trabajar un solo día.",
            author: "Lic. Fernando Ibarra",
            role: "Administrador, Corporativo Reforma",
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <main class="page">
            <header id="inicio" class="hero">
                <LazyImage class="hero__background" src="/assets/hero.jpg" alt="Obra en construcción al atardecer" />
                <div class="hero__content">
                    <h1 class="hero__title">{"Construimos lo que imaginas"}</h1>
                    <p class="hero__subtitle">
                        {"Más de 18 años levantando proyectos residenciales, comerciales e industriales con calidad certificada."}
                    </p>
                    <div class="hero__cta">
                        <a href="#contacto" class="btn btn--primary">{"Solicitar cotización"}</a>
                        <a href="#proyectos" class="btn btn--ghost">{"Ver proyectos"}</a>
                    </div>
                </div>
            </header>

            <section id="servicios" class="section services">
                <h2 class="section__title">{"Servicios"}</h2>
                <div class="services__grid">
                    { for SERVICES.iter().map(|&(icon, title, description)| html! {
                        <ServiceCard {icon} {title} {description} />
                    }) }
                </div>
            </section>

            <section class="section stats-section">
                <StatsCounter stats={stats()} />
            </section>

            <section id="proyectos" class="section portfolio">
                <h2 class="section__title">{"Proyectos"}</h2>
                <Portfolio projects={projects()} />
            </section>

            <section id="proceso" class="section process">
                <h2 class="section__title">{"Cómo trabajamos"}</h2>
                <ol class="timeline">
                    { for PROCESS.iter().enumerate().map(|(index, &(title, description))| html! {
                        <TimelineItem step={index as u32 + 1} {title} {description} />
                    }) }
                </ol>
            </section>

            <section id="testimonios" class="section testimonials-section">
                <h2 class="section__title">{"Lo que dicen nuestros clientes"}</h2>
                <TestimonialsSlider testimonials={testimonials()} />
            </section>

            <section id="contacto" class="section contact">
                <div class="contact__info">
                    <h2 class="section__title">{"Hablemos de tu proyecto"}</h2>
                    <p>{"Te respondemos en menos de 24 horas hábiles."}</p>
                    <ul class="contact__details">
                        <li>{"📍 Av. Constituyentes 1200, Querétaro"}</li>
                        <li>{"📞 +52 442 123 4567"}</li>
                        <li>{"✉️ contacto@apexconstructora.mx"}</li>
                    </ul>
                </div>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{format!("© {} Apex Constructora. Todos los derechos reservados.", year)}</p>
            </footer>
        </main>
    }
}
