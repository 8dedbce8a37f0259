//! The compiled-in content catalog.
//!
//! Per-sign and per-phase content is written as exhaustive `match`es so a new
//! enum variant without content is a compile error.

use cel_core::entities::{Ritual, SignInsight};
use cel_core::{MoonPhase, ZodiacSign};

pub(crate) const COSMIC_ENERGIES: &[&str] = &[
    "fiery passion and bold new beginnings",
    "grounded wisdom and patient growth",
    "intellectual curiosity and communication",
    "emotional depth and intuitive insights",
    "creative expression and leadership",
    "practical organization and service",
    "harmonious balance and partnership",
    "transformative power and mystery",
    "adventurous spirit and expansion",
    "ambitious goals and disciplined focus",
    "innovative thinking and humanitarian ideals",
    "spiritual connection and compassionate dreams",
];

pub(crate) const PLANETARY_INFLUENCES: &[&str] = &[
    "Mars ignites your warrior spirit",
    "Venus brings harmony to relationships",
    "Mercury sharpens your communication",
    "Moon enhances your emotional awareness",
    "Sun amplifies your core identity",
    "Jupiter expands your opportunities",
    "Saturn provides structure and wisdom",
    "Uranus brings unexpected breakthroughs",
    "Neptune dissolves boundaries for spiritual growth",
    "Pluto transforms through deep change",
];

pub(crate) const DAILY_THEMES: &[&str] = &[
    "new beginnings and fresh starts",
    "nurturing existing connections",
    "learning and intellectual growth",
    "emotional healing and self-care",
    "creative expression and joy",
    "service to others and community",
    "balance and harmony in all areas",
    "transformation and letting go",
    "adventure and exploration",
    "building foundations for the future",
    "innovation and breaking free",
    "spiritual connection and intuition",
];

pub(crate) const COLORS: &[&str] = &[
    "Gold", "Silver", "Purple", "Blue", "Green", "Red", "Orange", "Pink",
];

pub(crate) const POWER_TIMES: &[&str] = &["Dawn", "Midday", "Sunset", "Midnight"];

pub(crate) const DIGEST_ENERGIES: &[&str] = &[
    "The Moon in Cancer brings emotional depth and intuition",
    "Mercury's influence enhances communication and clarity",
    "Venus aligns with Jupiter, bringing abundance and harmony",
    "Mars energy fuels passion and determination",
    "Saturn's grounding influence provides stability",
    "Uranus brings unexpected breakthroughs and innovation",
    "Neptune enhances spiritual awareness and creativity",
    "Pluto's transformative energy encourages deep change",
];

pub(crate) fn sign_insight(sign: ZodiacSign) -> SignInsight {
    let (energy, focus, challenge, opportunity) = match sign {
        ZodiacSign::Aries => (
            "Your natural leadership shines today",
            "Take bold action on your goals",
            "Practice patience with slower-moving situations",
            "New ventures align with your pioneering spirit",
        ),
        ZodiacSign::Taurus => (
            "Your steady determination creates lasting results",
            "Build on your solid foundations",
            "Embrace change when it serves your growth",
            "Financial and material gains are favored",
        ),
        ZodiacSign::Gemini => (
            "Your quick mind processes information rapidly",
            "Communicate your ideas clearly",
            "Avoid spreading yourself too thin",
            "Networking brings valuable connections",
        ),
        ZodiacSign::Cancer => (
            "Your intuition guides you to emotional truth",
            "Nurture your relationships and home life",
            "Don't let emotions cloud your judgment",
            "Creative projects flow from your heart",
        ),
        ZodiacSign::Leo => (
            "Your natural charisma draws people to you",
            "Express your creativity and leadership",
            "Remember to listen as well as lead",
            "Recognition and appreciation come your way",
        ),
        ZodiacSign::Virgo => (
            "Your attention to detail serves you well",
            "Organize and improve your environment",
            "Don't be too hard on yourself or others",
            "Health and wellness goals are supported",
        ),
        ZodiacSign::Libra => (
            "Your sense of balance creates harmony",
            "Foster cooperation and partnership",
            "Make decisions without overthinking",
            "Beautiful experiences enhance your life",
        ),
        ZodiacSign::Scorpio => (
            "Your depth of perception reveals hidden truths",
            "Transform situations through your insight",
            "Release control when it no longer serves",
            "Intimate connections deepen meaningfully",
        ),
        ZodiacSign::Sagittarius => (
            "Your optimistic spirit opens new horizons",
            "Expand your knowledge and experience",
            "Ground your big ideas in practical steps",
            "Travel and learning bring growth",
        ),
        ZodiacSign::Capricorn => (
            "Your disciplined approach builds success",
            "Work steadily toward your long-term goals",
            "Allow yourself to enjoy the journey",
            "Career advancement is well-supported",
        ),
        ZodiacSign::Aquarius => (
            "Your innovative thinking breaks new ground",
            "Contribute to causes larger than yourself",
            "Connect emotionally while staying independent",
            "Technology and social change align with you",
        ),
        ZodiacSign::Pisces => (
            "Your spiritual sensitivity connects you to higher wisdom",
            "Trust your intuition and creative flow",
            "Maintain healthy boundaries",
            "Artistic and spiritual pursuits flourish",
        ),
    };
    SignInsight::new(energy, focus, challenge, opportunity)
}

pub(crate) const fn sign_readings(sign: ZodiacSign) -> &'static [&'static str] {
    match sign {
        ZodiacSign::Aries => &[
            "The fiery energy of Mars empowers you today, Aries. Your natural leadership qualities are amplified, making this the perfect time to take bold action on projects you've been contemplating. Trust your instincts and don't hesitate to blaze new trails.",
            "Your warrior spirit is particularly strong today, Aries. The cosmos encourages you to face challenges head-on with courage and determination. Remember, your enthusiasm is contagious - use it to inspire others around you.",
            "The stars align to boost your confidence and energy levels today, Aries. This is an excellent time for physical activity, competition, or any endeavor that requires passion and drive. Your natural optimism will attract positive opportunities.",
        ],
        ZodiacSign::Taurus => &[
            "Venus, your ruling planet, brings harmony and beauty to your day, Taurus. Focus on creating stability and comfort in your environment. Your practical nature will help you make wise decisions about resources and relationships.",
            "The earth element is strong within you today, Taurus. Ground yourself in nature or through physical activities that bring you joy. Your patience and determination will be rewarded as you work steadily toward your goals.",
            "Your sensual nature is heightened today, Taurus. Take time to appreciate the finer things in life - good food, beautiful surroundings, and meaningful connections. Your loyalty and reliability make you a trusted friend and partner.",
        ],
        ZodiacSign::Gemini => &[
            "Mercury's influence sharpens your communication skills today, Gemini. Your curiosity and adaptability are at their peak, making this an ideal time for learning, networking, and sharing ideas. Embrace your natural versatility.",
            "The twins within you are perfectly balanced today, Gemini. Your ability to see multiple perspectives will help you navigate complex situations with grace. Use your wit and charm to bring people together and foster understanding.",
            "Your mental energy is particularly vibrant today, Gemini. This is an excellent time for writing, teaching, or engaging in stimulating conversations. Your natural curiosity will lead you to discover fascinating new information.",
        ],
        ZodiacSign::Cancer => &[
            "The moon's nurturing energy surrounds you today, Cancer. Your emotional intelligence and intuition are heightened, helping you connect deeply with others. Trust your feelings and use your natural empathy to support those around you.",
            "Your protective instincts are strong today, Cancer. Focus on creating a safe, comfortable environment for yourself and your loved ones. Your caring nature will be appreciated by those who need emotional support.",
            "The cosmic tides favor your sensitive nature today, Cancer. Pay attention to your dreams and intuitive feelings - they may contain important messages. Your ability to create emotional security is a gift to those around you.",
        ],
        ZodiacSign::Leo => &[
            "The sun's radiant energy empowers you today, Leo. Your natural charisma and creativity are amplified, making this the perfect time to shine and express yourself. Your warmth and generosity will attract positive attention.",
            "Your leadership qualities are particularly strong today, Leo. Use your natural confidence and enthusiasm to inspire others and take charge of situations that need direction. Your dramatic flair will make any presentation memorable.",
            "The cosmos celebrates your unique spirit today, Leo. Embrace your natural creativity and express yourself through art, performance, or any activity that allows you to be in the spotlight. Your generosity will be returned tenfold.",
        ],
        ZodiacSign::Virgo => &[
            "Mercury's analytical energy sharpens your mind today, Virgo. Your attention to detail and practical skills are at their best, making this an ideal time for organizing, planning, and improving systems. Your helpful nature will be appreciated.",
            "Your perfectionist tendencies are balanced with wisdom today, Virgo. Focus on being helpful without being critical, and remember that progress is more important than perfection. Your practical advice will be valuable to others.",
            "The earth element grounds your analytical mind today, Virgo. Use your natural problem-solving abilities to help others and improve your environment. Your dedication to service and improvement is truly admirable.",
        ],
        ZodiacSign::Libra => &[
            "Venus brings harmony and balance to your day, Libra. Your natural diplomacy and sense of fairness will help you resolve conflicts and create peace in your relationships. Focus on finding the middle ground in any disagreements.",
            "Your aesthetic sense is particularly refined today, Libra. Surround yourself with beauty and use your natural charm to create harmonious relationships. Your ability to see all sides of an issue makes you an excellent mediator.",
            "The scales of justice are perfectly balanced for you today, Libra. Trust your natural sense of fairness and use your diplomatic skills to bring people together. Your grace and charm will open doors and create opportunities.",
        ],
        ZodiacSign::Scorpio => &[
            "Pluto's transformative energy empowers you today, Scorpio. Your natural intensity and determination will help you dive deep into any project or relationship. Trust your instincts and don't be afraid to explore the hidden depths.",
            "Your emotional depth and intuition are particularly strong today, Scorpio. Use your natural investigative skills to uncover truths and solve mysteries. Your loyalty and passion make you a powerful ally and friend.",
            "The cosmic energy supports your natural magnetism today, Scorpio. Your intensity and mysterious nature will attract others who are drawn to depth and authenticity. Trust your powerful instincts and emotional intelligence.",
        ],
        ZodiacSign::Sagittarius => &[
            "Jupiter's expansive energy broadens your horizons today, Sagittarius. Your natural optimism and love of adventure will lead you to new experiences and opportunities. Trust your intuition and embrace the unknown with enthusiasm.",
            "Your philosophical nature is particularly strong today, Sagittarius. Share your wisdom and insights with others, and be open to learning from different cultures and perspectives. Your natural honesty and directness will be appreciated.",
            "The cosmos encourages your adventurous spirit today, Sagittarius. Whether through travel, education, or spiritual exploration, embrace opportunities to expand your mind and experience new things. Your enthusiasm is infectious.",
        ],
        ZodiacSign::Capricorn => &[
            "Saturn's disciplined energy strengthens your resolve today, Capricorn. Your natural ambition and determination will help you achieve your goals through hard work and persistence. Your practical wisdom will guide you to success.",
            "Your leadership qualities are particularly strong today, Capricorn. Use your natural organizational skills and sense of responsibility to take charge of situations that need structure. Your reliability makes you a trusted authority.",
            "The earth element grounds your ambitious nature today, Capricorn. Focus on building solid foundations for your future through careful planning and steady progress. Your patience and determination will be rewarded.",
        ],
        ZodiacSign::Aquarius => &[
            "Uranus brings innovation and originality to your day, Aquarius. Your natural creativity and humanitarian spirit will inspire others and lead to breakthroughs in your projects. Embrace your unique perspective and don't be afraid to be different.",
            "Your intellectual curiosity and progressive thinking are heightened today, Aquarius. Use your natural inventiveness to solve problems and create new solutions. Your humanitarian nature will draw you to causes that benefit society.",
            "The cosmic energy supports your visionary nature today, Aquarius. Your ability to think outside the box and see the bigger picture will help you make important connections and inspire positive change. Your independence is a strength.",
        ],
        ZodiacSign::Pisces => &[
            "Neptune's mystical energy enhances your intuition today, Pisces. Your natural empathy and artistic sensitivity are at their peak, making this an ideal time for creative expression and spiritual connection. Trust your dreams and visions.",
            "Your compassionate nature is particularly strong today, Pisces. Use your natural healing abilities to support others emotionally and spiritually. Your artistic talents may lead to beautiful creations that touch people's hearts.",
            "The cosmic tides flow in your favor today, Pisces. Your natural psychic abilities and connection to the spiritual realm may bring important insights and guidance. Trust your intuition and let your imagination soar.",
        ],
    }
}

pub(crate) const fn digest_sign_message(sign: ZodiacSign) -> &'static str {
    match sign {
        ZodiacSign::Aries => {
            "As a fiery Aries, your natural leadership qualities are amplified today. Take bold action on your dreams."
        }
        ZodiacSign::Taurus => {
            "Grounded Taurus, your patience and determination will serve you well. Focus on building lasting foundations."
        }
        ZodiacSign::Gemini => {
            "Mercurial Gemini, your curiosity and adaptability shine. Embrace new ideas and connections."
        }
        ZodiacSign::Cancer => {
            "Nurturing Cancer, your intuition is especially strong. Trust your feelings and care for those around you."
        }
        ZodiacSign::Leo => {
            "Radiant Leo, your creativity and charisma are at their peak. Share your light with the world."
        }
        ZodiacSign::Virgo => {
            "Analytical Virgo, your attention to detail brings clarity. Organize and perfect what matters most."
        }
        ZodiacSign::Libra => {
            "Harmonious Libra, your sense of balance guides you. Seek beauty and fairness in all situations."
        }
        ZodiacSign::Scorpio => {
            "Mysterious Scorpio, your depth and intensity reveal hidden truths. Transform and evolve."
        }
        ZodiacSign::Sagittarius => {
            "Adventurous Sagittarius, your optimism opens new horizons. Explore and expand your knowledge."
        }
        ZodiacSign::Capricorn => {
            "Ambitious Capricorn, your discipline and focus bring success. Build your legacy step by step."
        }
        ZodiacSign::Aquarius => {
            "Innovative Aquarius, your unique perspective inspires change. Connect with your community."
        }
        ZodiacSign::Pisces => {
            "Dreamy Pisces, your compassion and creativity flow freely. Trust your spiritual guidance."
        }
    }
}

fn ritual(emoji: &str, title: &str, description: &str, energy: &str, affirmation: &str) -> Ritual {
    Ritual {
        emoji: emoji.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        energy: energy.to_string(),
        affirmation: affirmation.to_string(),
    }
}

pub(crate) fn rituals(phase: MoonPhase) -> Vec<Ritual> {
    match phase {
        MoonPhase::New => vec![
            ritual(
                "🌱",
                "Seed Planting Ceremony",
                "Plant seeds (real or symbolic) while setting intentions for what you want to grow in your life.",
                "New Beginnings & Manifestation",
                "I plant the seeds of my dreams and trust in their growth.",
            ),
            ritual(
                "📝",
                "Intention Setting Ritual",
                "Write your deepest desires and goals on a piece of paper. Fold it and place it under your pillow.",
                "Clarity & Focus",
                "My intentions are clear and my path is illuminated.",
            ),
            ritual(
                "🕯️",
                "Candle of Hope",
                "Light a white candle and meditate on your hopes and dreams.",
                "Hope & Possibility",
                "I am open to new possibilities and embrace change.",
            ),
        ],
        MoonPhase::WaxingCrescent => vec![
            ritual(
                "📚",
                "Knowledge Gathering",
                "Read, study, or learn something new that aligns with your intentions.",
                "Learning & Preparation",
                "I gather knowledge and wisdom to support my growth.",
            ),
            ritual(
                "💎",
                "Crystal Charging",
                "Place your crystals in moonlight to charge them with the growing energy.",
                "Energy & Power",
                "I am gathering strength and energy for my journey.",
            ),
            ritual(
                "🌿",
                "Herbal Blessing",
                "Create a small bundle of herbs that represent your goals.",
                "Connection & Remembrance",
                "I stay connected to my intentions and my path.",
            ),
        ],
        MoonPhase::FirstQuarter => vec![
            ritual(
                "⚡",
                "Action Activation",
                "Take a concrete step toward your goals. The energy is perfect for making decisions.",
                "Action & Momentum",
                "I take bold action toward my dreams and goals.",
            ),
            ritual(
                "🗣️",
                "Voice Your Truth",
                "Speak your intentions aloud to the universe. Share your goals with trusted friends.",
                "Communication & Expression",
                "I speak my truth with confidence and clarity.",
            ),
            ritual(
                "🏃",
                "Movement Ritual",
                "Dance, walk, or move your body in a way that represents progress toward your goals.",
                "Movement & Progress",
                "I move forward with purpose and determination.",
            ),
        ],
        MoonPhase::WaxingGibbous => vec![
            ritual(
                "🔧",
                "Refinement Ceremony",
                "Review and refine your plans. Make adjustments to align better with your highest good.",
                "Refinement & Adjustment",
                "I refine my path to align with my highest purpose.",
            ),
            ritual(
                "🎯",
                "Focus Ritual",
                "Meditate on your goals with laser focus. Visualize success and feel the energy of achievement.",
                "Focus & Visualization",
                "I maintain unwavering focus on my goals.",
            ),
            ritual(
                "✨",
                "Polish Your Intentions",
                "Polish a stone or crystal while thinking about polishing your intentions.",
                "Perfection & Shine",
                "My intentions shine brightly and attract success.",
            ),
        ],
        MoonPhase::Full => vec![
            ritual(
                "🌕",
                "Full Moon Release Ritual",
                "Write down what you wish to release on a piece of paper. Light a candle, read your list aloud, and then safely burn the paper.",
                "Letting Go & Renewal",
                "I release what no longer serves me and make space for new blessings.",
            ),
            ritual(
                "🕯️",
                "Moonlight Bath",
                "Take a ritual bath by moonlight. Add sea salt and essential oils to cleanse your energy.",
                "Celebration & Cleansing",
                "I celebrate my growth and cleanse my spirit.",
            ),
            ritual(
                "🔮",
                "Divination Session",
                "Use tarot cards, runes, or other divination tools to gain insights under the full moon's energy.",
                "Insight & Illumination",
                "I receive clear guidance and illuminating insights.",
            ),
        ],
        MoonPhase::WaningGibbous => vec![
            ritual(
                "🙏",
                "Gratitude Ceremony",
                "Express gratitude for all you've received. Write thank you notes to the universe.",
                "Gratitude & Appreciation",
                "I am deeply grateful for all the blessings in my life.",
            ),
            ritual(
                "🤝",
                "Sharing Ritual",
                "Share your knowledge, resources, or time with others. The energy supports giving back.",
                "Sharing & Community",
                "I share my gifts and support others on their journey.",
            ),
            ritual(
                "📖",
                "Wisdom Integration",
                "Reflect on what you've learned and integrate the wisdom into your being.",
                "Integration & Wisdom",
                "I integrate my experiences and grow wiser each day.",
            ),
        ],
        MoonPhase::LastQuarter => vec![
            ritual(
                "💝",
                "Forgiveness Ritual",
                "Write down what you need to forgive yourself or others for. Burn the paper and release the burden.",
                "Forgiveness & Release",
                "I forgive myself and others, releasing all burdens.",
            ),
            ritual(
                "🧹",
                "Space Clearing",
                "Clean and declutter your physical space to reflect the clearing of your inner space.",
                "Clearing & Purification",
                "I clear my space and make room for new energy.",
            ),
            ritual(
                "🔄",
                "Completion Ceremony",
                "Acknowledge what you've completed and celebrate the endings that make way for new beginnings.",
                "Completion & Transition",
                "I honor my completions and welcome new cycles.",
            ),
        ],
        MoonPhase::WaningCrescent => vec![
            ritual(
                "😴",
                "Rest and Renewal",
                "Take time to rest, meditate, and prepare for the new cycle. Honor your need for quiet.",
                "Rest & Renewal",
                "I honor my need for rest and prepare for new beginnings.",
            ),
            ritual(
                "📝",
                "Reflection Journaling",
                "Write about what you've learned in this lunar cycle and what you want to carry forward.",
                "Reflection & Integration",
                "I reflect on my journey and integrate my lessons.",
            ),
            ritual(
                "🛁",
                "Purification Bath",
                "Take a cleansing bath with Epsom salts to purify your energy and prepare for the new moon.",
                "Purification & Preparation",
                "I purify my energy and prepare for new possibilities.",
            ),
        ],
    }
}
