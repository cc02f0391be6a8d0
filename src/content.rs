//! Fixed replies for the informational commands: /agenda, /activites, /faq

pub const AGENDA: &str = "📅 **Hackathon Agenda**
- 09:00 Opening Ceremony
- 10:00 Team Formation
- 11:00 Hacking Begins
- 12:30 Lunch Break
- 18:00 Check-in & Mentoring
- 20:00 Dinner
- 00:00 Submissions Close
- 01:00 Awards & Closing";

pub const ACTIVITIES: &str = "🎉 **Hackathon Activities**
- Networking Games
- Family feud
- Musical Chairs
- Musical pause
- Card games/Consoles
";

pub const FAQ: &str = "❓ **FAQ**
1. **When does the hackathon end?** Submissions close at 10pm on Saturday.
2. **Where can I find resources?** See the #resources channel and if you need help ask the mentors and organizers.
2.18. **Is dahlia the best chway ?** ofc she is currently in contention with chway za3im along with  her aprentice adnane.
3. **Is staying in the place mandatory??** Yes due to the nature of the hackathon and the policy of the institute.
4. **What tech stack?** Any stack is allowed as long as it is open source and doesn’t manipulate the data in hand.
5. **Who do I contact for help?** Use `/call` to reach out to organizers or mentors.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agenda_text() {
        assert_eq!(
            AGENDA,
            "📅 **Hackathon Agenda**\n\
             - 09:00 Opening Ceremony\n\
             - 10:00 Team Formation\n\
             - 11:00 Hacking Begins\n\
             - 12:30 Lunch Break\n\
             - 18:00 Check-in & Mentoring\n\
             - 20:00 Dinner\n\
             - 00:00 Submissions Close\n\
             - 01:00 Awards & Closing"
        );
    }

    #[test]
    fn test_activities_text() {
        assert_eq!(
            ACTIVITIES,
            "🎉 **Hackathon Activities**\n\
             - Networking Games\n\
             - Family feud\n\
             - Musical Chairs\n\
             - Musical pause\n\
             - Card games/Consoles\n"
        );
    }

    #[test]
    fn test_faq_text() {
        assert_eq!(
            FAQ,
            "❓ **FAQ**\n\
             1. **When does the hackathon end?** Submissions close at 10pm on Saturday.\n\
             2. **Where can I find resources?** See the #resources channel and if you need help ask the mentors and organizers.\n\
             2.18. **Is dahlia the best chway ?** ofc she is currently in contention with chway za3im along with  her aprentice adnane.\n\
             3. **Is staying in the place mandatory??** Yes due to the nature of the hackathon and the policy of the institute.\n\
             4. **What tech stack?** Any stack is allowed as long as it is open source and doesn’t manipulate the data in hand.\n\
             5. **Who do I contact for help?** Use `/call` to reach out to organizers or mentors."
        );
    }
}
